use std::collections::HashMap;

/// Template processor for resolving $VARIABLE format variables
pub struct Tpl {
    variables: HashMap<String, String>,
}

impl Tpl {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Register a variable with its value
    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.insert(key.into(), value.into());
    }

    /// Parse a string and resolve all $VARIABLE references
    pub fn parse(&self, input: &str) -> String {
        // longest keys first so `$NAME` cannot eat the head of `$NAMESPACE`
        let mut keys: Vec<&String> = self.variables.keys().collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = input.to_string();
        for key in keys {
            let pattern = format!("${}", key);
            result = result.replace(&pattern, &self.variables[key]);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_name() {
        let mut tpl = Tpl::new();
        tpl.register("PRODUCT", "ukg-schedule-sync");
        tpl.register("VERSION", "1.2.3");

        let result = tpl.parse("$PRODUCT_v$VERSION.zip");
        assert_eq!(result, "ukg-schedule-sync_v1.2.3.zip");
    }

    #[test]
    fn test_multiple_occurrences() {
        let mut tpl = Tpl::new();
        tpl.register("NAME", "test");

        let result = tpl.parse("$NAME-$NAME");
        assert_eq!(result, "test-test");
    }

    #[test]
    fn test_prefix_keys() {
        let mut tpl = Tpl::new();
        tpl.register("V", "short");
        tpl.register("VERSION", "2.0.0");

        assert_eq!(tpl.parse("$VERSION/$V"), "2.0.0/short");
    }

    #[test]
    fn test_unknown_variable_is_kept() {
        let tpl = Tpl::new();
        assert_eq!(tpl.parse("$UNKNOWN.zip"), "$UNKNOWN.zip");
    }
}
