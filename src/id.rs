use uuid::Uuid;

/// Generate a fresh entity id.
///
/// Ids must be unique within a single editing session; they are not required
/// to be globally unique or cryptographically meaningful. A v4 UUID string
/// comfortably clears that bar.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }
}
