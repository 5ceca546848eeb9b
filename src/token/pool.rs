//! Ordered credential pool loaded from the process environment.
//!
//! Tokens live in numbered variables (`HF_TOKEN1`, `HF_TOKEN2`, ...). The pool
//! is materialized once at startup; lookups are 1-based and bounds-checked, so
//! running past the end of the pool is an explicit `None` rather than an empty
//! env read.
use std::env;

pub const TOKEN_ENV_PREFIX: &str = "HF_TOKEN";

#[derive(Clone, Debug, Default)]
pub struct TokenPool {
    tokens: Vec<String>,
}

impl TokenPool {
    /// Probe `HF_TOKEN1`, `HF_TOKEN2`, ... until the first unset (or empty)
    /// name. Gaps in the numbering end the pool.
    pub fn from_env() -> Self {
        Self::from_env_with_prefix(TOKEN_ENV_PREFIX)
    }

    pub fn from_env_with_prefix(prefix: &str) -> Self {
        let mut tokens = Vec::new();
        let mut index = 1u32;
        loop {
            match env::var(format!("{}{}", prefix, index)) {
                Ok(token) if !token.is_empty() => tokens.push(token),
                _ => break,
            }
            index += 1;
        }
        TokenPool { tokens }
    }

    pub fn from_tokens(tokens: Vec<String>) -> Self {
        TokenPool { tokens }
    }

    /// 1-based lookup; `None` signals exhaustion.
    pub fn get(&self, index: u32) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.tokens.get((index - 1) as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_one_based_and_bounds_checked() {
        let pool = TokenPool::from_tokens(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(pool.get(0), None);
        assert_eq!(pool.get(1), Some("a"));
        assert_eq!(pool.get(2), Some("b"));
        assert_eq!(pool.get(3), None);
    }

    #[test]
    fn probing_stops_at_first_gap() {
        env::set_var("POOL_TEST_TOKEN1", "one");
        env::set_var("POOL_TEST_TOKEN2", "two");
        env::set_var("POOL_TEST_TOKEN4", "four");
        let pool = TokenPool::from_env_with_prefix("POOL_TEST_TOKEN");
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(2), Some("two"));
        assert_eq!(pool.get(4), None);
    }

    #[test]
    fn empty_value_ends_the_pool() {
        env::set_var("POOL_EMPTY_TOKEN1", "one");
        env::set_var("POOL_EMPTY_TOKEN2", "");
        env::set_var("POOL_EMPTY_TOKEN3", "three");
        let pool = TokenPool::from_env_with_prefix("POOL_EMPTY_TOKEN");
        assert_eq!(pool.len(), 1);
    }
}
