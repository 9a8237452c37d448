use crate::ids::CategoryId;

/// Best-seller category tile
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub tagline: String,
    pub count: u32,
    pub image: String,
}

impl Category {
    pub fn count_label(&self) -> String {
        format!("{} Items", self.count)
    }

    pub fn href(&self) -> String {
        format!("#/category/{}", self.slug)
    }
}
