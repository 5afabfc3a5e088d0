/// Domain representation of a user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub id: u64,
    pub nombre: String,
}

impl Usuario {
    pub fn new(id: u64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
        }
    }

    /// Records every fresh store starts with
    pub fn seed() -> Vec<Usuario> {
        vec![
            Usuario::new(1, "Juan"),
            Usuario::new(2, "Karen"),
            Usuario::new(3, "Diego"),
            Usuario::new(4, "Maria"),
        ]
    }

    /// Parse a raw path segment into a record id.
    /// Ids are positive, so `0` is rejected along with anything non-numeric.
    pub fn parse_id(raw: &str) -> Option<u64> {
        raw.parse::<u64>().ok().filter(|id| *id > 0)
    }
}
