use thiserror::Error;

use crate::config::SiteConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    #[error("Contraseña incorrecta")]
    WrongPassword,
}

/// Who is looking at the review board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    Visitor,
    Admin,
}

impl AdminSession {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn from_stored(flag: bool) -> Self {
        if flag {
            Self::Admin
        } else {
            Self::Visitor
        }
    }

    pub fn as_stored(self) -> bool {
        self.is_admin()
    }
}

/// Plain string comparison against a fixed password.
///
/// This only hides the delete buttons. The password ships inside the wasm
/// bundle and the flag lives in local storage, so anyone can flip it.
#[derive(Debug, Clone)]
pub struct AdminGate {
    password: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn from_config(conf: &SiteConfig) -> Self {
        Self::new(conf.admin_password.clone())
    }

    pub fn check(&self, attempt: &str) -> Result<AdminSession, AdminError> {
        if attempt == self.password {
            Ok(AdminSession::Admin)
        } else {
            Err(AdminError::WrongPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_check() {
        let gate = AdminGate::new("hunter2");
        assert_eq!(gate.check("hunter2"), Ok(AdminSession::Admin));
        assert_eq!(gate.check("hunter3"), Err(AdminError::WrongPassword));
        assert_eq!(gate.check(""), Err(AdminError::WrongPassword));
        // no trimming or case folding
        assert!(gate.check(" hunter2").is_err());
        assert!(gate.check("HUNTER2").is_err());
    }

    #[test]
    fn test_gate_from_config() {
        let conf = SiteConfig::from_env();
        let gate = AdminGate::from_config(&conf);
        assert!(gate.check(&conf.admin_password).is_ok());
    }

    #[test]
    fn test_session_storage_flag() {
        assert_eq!(AdminSession::from_stored(true), AdminSession::Admin);
        assert_eq!(AdminSession::from_stored(false), AdminSession::Visitor);
        assert!(AdminSession::Admin.as_stored());
        assert!(!AdminSession::default().is_admin());
    }

    #[test]
    fn test_wrong_password_message() {
        assert_eq!(AdminError::WrongPassword.to_string(), "Contraseña incorrecta");
    }
}
