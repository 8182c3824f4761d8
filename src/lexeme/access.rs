use super::*;

impl Chainlexeme {
    /// Get a typed value using a `section.key` path.
    ///
    /// # Examples
    /// ```
    /// # use chainlexeme::Chainlexeme;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let lexeme = Chainlexeme::from_str("[header]\nfrom: aln1abc\nnonce: 7\n")?;
    /// let from: String = lexeme.get("header.from")?;
    /// let nonce: u64 = lexeme.get("header.nonce")?;
    /// assert_eq!((from.as_str(), nonce), ("aln1abc", 7));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if the path doesn't exist or the value can't be
    /// converted to `T`. Conversion errors carry the source line.
    pub fn get<T>(&self, path: &str) -> Result<T, LexemeError>
    where
        T: TryFrom<Value, Error = LexemeError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| e.with_line(self.line_of(path)))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, LexemeError>
    where
        T: TryFrom<Value, Error = LexemeError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(LexemeError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = LexemeError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Untyped lookup of `section.key`.
    pub fn get_value(&self, path: &str) -> Result<Value, LexemeError> {
        let (section, key) = split_path(path)?;
        let key = key.ok_or_else(|| LexemeError::InvalidPath {
            path: path.to_string(),
            message: "missing key".into(),
            hint: Some("Use section.key, e.g. header.nonce".into()),
            code: Some(305),
        })?;

        self.document
            .get(section, key)
            .cloned()
            .ok_or_else(|| LexemeError::MissingKey {
                path: path.to_string(),
                hint: Some(format!("No '{}' entry in [{}]", key, section)),
                code: Some(304),
            })
    }

    /// Keys of a section, in document order.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, LexemeError> {
        match split_path(path)? {
            (section, None) => Ok(self.document.section(section).keys().cloned().collect()),
            (_, Some(_)) => Err(LexemeError::InvalidPath {
                path: path.to_string(),
                message: "expected a bare section name".into(),
                hint: Some("Use header, data or footer".into()),
                code: Some(305),
            }),
        }
    }

    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Source line of the last assignment to `section.key`, if known.
    pub fn line_of(&self, path: &str) -> Option<usize> {
        match split_path(path).ok()? {
            (section, Some(key)) => self.document.line_of(section, key),
            (_, None) => None,
        }
    }

    /// Get a string value and check it is one of the allowed values.
    pub fn get_string_enum(&self, path: &str, allowed_values: &[&str]) -> Result<String, LexemeError> {
        let value: String = self.get(path)?;

        if !allowed_values.contains(&value.as_str()) {
            return Err(LexemeError::ValidationError {
                message: format!("Invalid value '{}' for `{}`", value, path),
                line: self.line_of(path),
                hint: Some(format!("Expected one of: {}", allowed_values.join(", "))),
                code: Some(451),
            });
        }

        Ok(value)
    }
}
