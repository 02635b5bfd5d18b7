//! Profile record written to the remote user table.

use serde::Serialize;

use super::RegistrationInput;

/// Row inserted once per successful registration.
///
/// Field names match the columns of the remote `usuarios` table; no
/// local copy is retained after the insert.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRecord {
    pub nome: String,
    pub email: String,
}

impl From<&RegistrationInput> for ProfileRecord {
    fn from(input: &RegistrationInput) -> Self {
        Self {
            nome: input.name.clone(),
            email: input.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_remote_column_names() {
        let record = ProfileRecord {
            nome: "Maria".to_string(),
            email: "maria@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            json!({"nome": "Maria", "email": "maria@example.com"})
        );
    }
}
