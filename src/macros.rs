/// Builds a [`Value`](crate::Value) tree using plist punctuation.
///
/// Dictionaries use `key = value;` entries, arrays use parentheses, and
/// `YES`/`NO` are the boolean literals, matching the textual format:
///
/// ```rust
/// use ascii_plist::plist;
///
/// let prefs = plist!({
///     "name" = "Alice";
///     "admin" = YES;
///     "scores" = (1, 2, 3);
/// });
/// assert!(prefs.is_dictionary());
/// ```
#[macro_export]
macro_rules! plist {
    // Boolean words
    (YES) => {
        $crate::Value::Boolean(true)
    };

    (NO) => {
        $crate::Value::Boolean(false)
    };

    // Handle empty array
    (()) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    (( $($elem:tt),* $(,)? )) => {
        $crate::Value::Array(vec![$($crate::plist!($elem)),*])
    };

    // Handle empty dictionary
    ({}) => {
        $crate::Value::Dictionary($crate::Dictionary::new())
    };

    // Handle non-empty dictionary
    ({ $($key:literal = $value:tt);* $(;)? }) => {{
        let mut dict = $crate::Dictionary::new();
        $(
            dict.insert($key.to_string(), $crate::plist!($value));
        )*
        $crate::Value::Dictionary(dict)
    }};

    // Fallback for any expression with a From conversion
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Dictionary, Value};

    #[test]
    fn test_plist_macro_primitives() {
        assert_eq!(plist!(YES), Value::Boolean(true));
        assert_eq!(plist!(NO), Value::Boolean(false));
        assert_eq!(plist!(42), Value::Integer(42));
        assert_eq!(plist!(3.5), Value::Real(3.5));
        assert_eq!(plist!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_plist_macro_arrays() {
        assert_eq!(plist!(()), Value::Array(vec![]));

        let arr = plist!((1, 2, 3));
        match arr {
            Value::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::Integer(1));
                assert_eq!(items[1], Value::Integer(2));
                assert_eq!(items[2], Value::Integer(3));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_plist_macro_dictionaries() {
        assert_eq!(plist!({}), Value::Dictionary(Dictionary::new()));

        let dict = plist!({
            "name" = "Alice";
            "age" = 30;
        });

        match dict {
            Value::Dictionary(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("age"), Some(&Value::Integer(30)));
            }
            _ => panic!("Expected dictionary"),
        }
    }

    #[test]
    fn test_plist_macro_nesting() {
        let tree = plist!({
            "outer" = {
                "inner" = (YES, NO);
            };
        });

        let inner = tree
            .as_dictionary()
            .unwrap()
            .get("outer")
            .unwrap()
            .as_dictionary()
            .unwrap()
            .get("inner")
            .unwrap();
        assert_eq!(
            inner,
            &Value::Array(vec![Value::Boolean(true), Value::Boolean(false)])
        );
    }
}
