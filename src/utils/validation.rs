use crate::error::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").unwrap())
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.len() > 255 || !email_regex().is_match(email) {
        return Err(AppError::ValidationError("E-mail inválido".to_string()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.len() < 2 || trimmed.len() > 100 {
        return Err(AppError::ValidationError(
            "O nome deve ter entre 2 e 100 caracteres".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("maria@fazenda.com.br").is_ok());
        assert!(validate_email("joao.silva+agro@gmail.com").is_ok());
        assert!(validate_email("sem-arroba.com").is_err());
        assert!(validate_email("maria@").is_err());
        assert!(validate_email("@fazenda.com").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Maria Souza").is_ok());
        assert!(validate_name("M").is_err());
        assert!(validate_name(&"a".repeat(101)).is_err());
    }
}
