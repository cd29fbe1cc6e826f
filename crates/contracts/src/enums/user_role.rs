use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Client,
    Supplier,
    Admin,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Supplier => "supplier",
            UserRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Supplier => "Fournisseur",
            UserRole::Admin => "Administrateur",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Client, UserRole::Supplier, UserRole::Admin]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "client" => Some(UserRole::Client),
            "supplier" => Some(UserRole::Supplier),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
