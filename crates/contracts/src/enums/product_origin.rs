use serde::{Deserialize, Serialize};

/// Product provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrigin {
    Africa,
    Asia,
}

impl ProductOrigin {
    pub fn code(&self) -> &'static str {
        match self {
            ProductOrigin::Africa => "africa",
            ProductOrigin::Asia => "asia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductOrigin::Africa => "Afrique",
            ProductOrigin::Asia => "Asie",
        }
    }

    pub fn all() -> Vec<ProductOrigin> {
        vec![ProductOrigin::Africa, ProductOrigin::Asia]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "africa" => Some(ProductOrigin::Africa),
            "asia" => Some(ProductOrigin::Asia),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
