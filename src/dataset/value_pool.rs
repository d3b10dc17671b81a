/// Round-robin supply of example values for a single entity
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicValuePool {
    values: Vec<String>,
    cursor: usize,
}

impl CyclicValuePool {
    pub fn new(values: Vec<String>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Returns the value under the cursor and moves the cursor forward, wrapping
    /// around the end of the pool. Returns `None` only when the pool is empty.
    pub fn next_value(&mut self) -> Option<String> {
        if self.values.is_empty() {
            return None;
        }
        let value = self.values[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.values.len();
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_should_cycle() {
        // Given
        let mut pool = CyclicValuePool::new(vec!["a".to_string(), "b".to_string()]);

        // When
        let values: Vec<_> = (0..5).filter_map(|_| pool.next_value()).collect();

        // Then
        assert_eq!(vec!["a", "b", "a", "b", "a"], values);
    }

    #[test]
    fn test_empty_pool_yields_nothing() {
        let mut pool = CyclicValuePool::new(vec![]);
        assert_eq!(None, pool.next_value());
        assert_eq!(None, pool.next_value());
    }
}
