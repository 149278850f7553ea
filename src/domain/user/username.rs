use crate::utils::{is_empty_or_whitespace, is_too_long};
use regex::Regex;

#[derive(Debug)]
pub struct Username(String);

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Username {
    pub fn parse(s: String) -> Result<Username, String> {
        let expression = Regex::new(r"^[\w.~@-]*$").unwrap();
        let contains_forbidden_characters = !expression.is_match(&s);

        if is_empty_or_whitespace(&s) || is_too_long(&s, 70) || contains_forbidden_characters {
            Err(format!("{} is not a valid username.", s))
        } else {
            Ok(Self(s))
        }
    }
}
