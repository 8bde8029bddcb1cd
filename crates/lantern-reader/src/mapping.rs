use crate::error::ReaderError;
use crate::value::Value;

/// A named list: `(name entry*)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReaderObject<'a> {
    pub name: &'a str,
    pub mapping: ReaderMapping<'a>,
}

impl<'a> ReaderObject<'a> {
    /// Views `value` as an object if it is a list headed by a symbol.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let (head, rest) = value.as_list()?.split_first()?;
        let name = head.as_symbol()?;
        Some(Self { name, mapping: ReaderMapping::new(rest) })
    }
}

/// Key/value view over a list of `(key value*)` entries.
///
/// Lookup returns the first entry with a matching key. Entries that are not
/// symbol-headed lists are skipped. Absent keys read as `Ok(None)`; present
/// keys holding the wrong kind of value are `Err`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReaderMapping<'a> {
    entries: &'a [Value],
}

impl<'a> ReaderMapping<'a> {
    #[inline]
    pub fn new(entries: &'a [Value]) -> Self {
        Self { entries }
    }

    /// Keys in source order (duplicates included).
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.entries.iter().filter_map(|e| Some(e.as_list()?.first()?.as_symbol()?))
    }

    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Raw arguments following `key` in its entry.
    pub fn find(&self, key: &str) -> Option<&'a [Value]> {
        self.entries.iter().find_map(|e| {
            let (head, rest) = e.as_list()?.split_first()?;
            (head.as_symbol()? == key).then_some(rest)
        })
    }

    fn single(&self, key: &str) -> Result<Option<&'a Value>, ReaderError> {
        match self.find(key) {
            None => Ok(None),
            Some([v]) => Ok(Some(v)),
            Some(args) => Err(ReaderError::new(
                key,
                format!("expected a single value, got {}", args.len()),
            )),
        }
    }

    fn scalar<T>(
        &self,
        key: &str,
        expected: &str,
        conv: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<Option<T>, ReaderError> {
        match self.single(key)? {
            None => Ok(None),
            Some(v) => conv(v)
                .map(Some)
                .ok_or_else(|| ReaderError::new(key, format!("expected {}, got {}", expected, v.kind()))),
        }
    }

    fn vec<T>(
        &self,
        key: &str,
        expected: &str,
        conv: impl Fn(&'a Value) -> Option<T>,
    ) -> Result<Option<Vec<T>>, ReaderError> {
        let Some(args) = self.find(key) else { return Ok(None) };
        args.iter()
            .enumerate()
            .map(|(i, v)| {
                conv(v).ok_or_else(|| {
                    ReaderError::new(key, format!("element {} is a {}, expected {}", i, v.kind(), expected))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ReaderError> {
        self.scalar(key, "boolean", Value::as_bool)
    }

    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, ReaderError> {
        self.scalar(key, "integer", Value::as_i32)
    }

    /// Reads a number; integers are accepted and widened.
    pub fn get_f32(&self, key: &str) -> Result<Option<f32>, ReaderError> {
        self.scalar(key, "number", Value::as_f32)
    }

    pub fn get_string(&self, key: &str) -> Result<Option<&'a str>, ReaderError> {
        self.scalar(key, "string", Value::as_str)
    }

    pub fn get_f32_vec(&self, key: &str) -> Result<Option<Vec<f32>>, ReaderError> {
        self.vec(key, "number", Value::as_f32)
    }

    pub fn get_i32_vec(&self, key: &str) -> Result<Option<Vec<i32>>, ReaderError> {
        self.vec(key, "integer", Value::as_i32)
    }

    pub fn get_bool_vec(&self, key: &str) -> Result<Option<Vec<bool>>, ReaderError> {
        self.vec(key, "boolean", Value::as_bool)
    }

    /// Reads a nested mapping: `(key (k v) (k v) ...)`.
    pub fn get_mapping(&self, key: &str) -> Result<Option<ReaderMapping<'a>>, ReaderError> {
        let Some(args) = self.find(key) else { return Ok(None) };
        if let Some(bad) = args.iter().find(|v| v.as_list().is_none()) {
            return Err(ReaderError::new(
                key,
                format!("expected a mapping of (key value) entries, found a {}", bad.kind()),
            ));
        }
        Ok(Some(ReaderMapping::new(args)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_str;

    const SRC: &str = r#"
        (thing
          (name "crate")
          (count 3)
          (speed 2)
          (ratio 0.5)
          (solid #t)
          (pos 1 2.5)
          (flags #t #f)
          (child (file "a.png"))
          (pair 1 2))
    "#;

    #[test]
    fn reads_typed_scalars() {
        let doc = parse_str(SRC).unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.name, "thing");
        let m = root.mapping;
        assert_eq!(m.get_string("name").unwrap(), Some("crate"));
        assert_eq!(m.get_i32("count").unwrap(), Some(3));
        assert_eq!(m.get_f32("speed").unwrap(), Some(2.0));
        assert_eq!(m.get_f32("ratio").unwrap(), Some(0.5));
        assert_eq!(m.get_bool("solid").unwrap(), Some(true));
    }

    #[test]
    fn reads_vectors_and_mappings() {
        let doc = parse_str(SRC).unwrap();
        let m = doc.root().unwrap().mapping;
        assert_eq!(m.get_f32_vec("pos").unwrap(), Some(vec![1.0, 2.5]));
        assert_eq!(m.get_bool_vec("flags").unwrap(), Some(vec![true, false]));
        assert_eq!(m.get_i32_vec("pair").unwrap(), Some(vec![1, 2]));
        let child = m.get_mapping("child").unwrap().unwrap();
        assert_eq!(child.get_string("file").unwrap(), Some("a.png"));
    }

    #[test]
    fn absent_keys_are_none() {
        let doc = parse_str(SRC).unwrap();
        let m = doc.root().unwrap().mapping;
        assert_eq!(m.get_f32("missing").unwrap(), None);
        assert!(m.get_mapping("missing").unwrap().is_none());
        assert!(!m.has("missing"));
        assert!(m.has("pos"));
    }

    #[test]
    fn wrong_kinds_are_errors() {
        let doc = parse_str(SRC).unwrap();
        let m = doc.root().unwrap().mapping;
        let err = m.get_bool("count").unwrap_err();
        assert_eq!(err.key, "count");
        assert!(m.get_f32("pos").is_err(), "two values where one is expected");
        assert!(m.get_f32_vec("flags").is_err());
        assert!(m.get_mapping("count").is_err());
        assert!(m.get_i32("ratio").is_err());
    }

    #[test]
    fn keys_follow_source_order() {
        let doc = parse_str(SRC).unwrap();
        let keys: Vec<_> = doc.root().unwrap().mapping.keys().collect();
        assert_eq!(keys.first(), Some(&"name"));
        assert_eq!(keys.last(), Some(&"pair"));
        assert_eq!(keys.len(), 9);
    }
}
