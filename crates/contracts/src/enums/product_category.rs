use serde::{Deserialize, Serialize};

/// Fixed catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Artisanat,
    Textile,
    Cosmetique,
    Alimentaire,
    Electronique,
    Decoration,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Artisanat => "artisanat",
            ProductCategory::Textile => "textile",
            ProductCategory::Cosmetique => "cosmetique",
            ProductCategory::Alimentaire => "alimentaire",
            ProductCategory::Electronique => "electronique",
            ProductCategory::Decoration => "decoration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Artisanat => "Artisanat",
            ProductCategory::Textile => "Textile",
            ProductCategory::Cosmetique => "Cosmétique",
            ProductCategory::Alimentaire => "Alimentaire",
            ProductCategory::Electronique => "Électronique",
            ProductCategory::Decoration => "Décoration",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Artisanat,
            ProductCategory::Textile,
            ProductCategory::Cosmetique,
            ProductCategory::Alimentaire,
            ProductCategory::Electronique,
            ProductCategory::Decoration,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "artisanat" => Some(ProductCategory::Artisanat),
            "textile" => Some(ProductCategory::Textile),
            "cosmetique" => Some(ProductCategory::Cosmetique),
            "alimentaire" => Some(ProductCategory::Alimentaire),
            "electronique" => Some(ProductCategory::Electronique),
            "decoration" => Some(ProductCategory::Decoration),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
