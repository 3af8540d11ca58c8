use serde::{Deserialize, Serialize};

/// Product categories a roster row can subscribe to. Serialized by wire slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTag {
    Any,
    PolyPipe,
    LinePipe,
    CompositePipe,
    FlexPipe,
    TubingSandScreens,
    Tubing,
    Casing,
    Other,
}

impl ProductTag {
    pub fn slug(self) -> &'static str {
        match self {
            ProductTag::Any => "any",
            ProductTag::PolyPipe => "poly_pipe",
            ProductTag::LinePipe => "line_pipe",
            ProductTag::CompositePipe => "composite_pipe",
            ProductTag::FlexPipe => "flex_pipe",
            ProductTag::TubingSandScreens => "tubing_sand_screens",
            ProductTag::Tubing => "tubing",
            ProductTag::Casing => "casing",
            ProductTag::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductTag::Any => "Any",
            ProductTag::PolyPipe => "Poly Pipe",
            ProductTag::LinePipe => "Line Pipe",
            ProductTag::CompositePipe => "Composite Pipe",
            ProductTag::FlexPipe => "Flexpipe",
            ProductTag::TubingSandScreens => "Tubing - Sand Screens",
            ProductTag::Tubing => "Tubing",
            ProductTag::Casing => "Casing",
            ProductTag::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        let tag = match slug {
            "any" => ProductTag::Any,
            "poly_pipe" => ProductTag::PolyPipe,
            "line_pipe" => ProductTag::LinePipe,
            "composite_pipe" => ProductTag::CompositePipe,
            "flex_pipe" => ProductTag::FlexPipe,
            "tubing_sand_screens" => ProductTag::TubingSandScreens,
            "tubing" => ProductTag::Tubing,
            "casing" => ProductTag::Casing,
            "other" => ProductTag::Other,
            _ => return None,
        };
        Some(tag)
    }
}

/// Ordered option list offered by a roster's tag selector. The order is the
/// display order and the submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    options: Vec<ProductTag>,
}

impl TagVocabulary {
    /// The eight concrete product categories.
    pub fn standard() -> Self {
        Self {
            options: vec![
                ProductTag::PolyPipe,
                ProductTag::LinePipe,
                ProductTag::CompositePipe,
                ProductTag::FlexPipe,
                ProductTag::TubingSandScreens,
                ProductTag::Tubing,
                ProductTag::Casing,
                ProductTag::Other,
            ],
        }
    }

    /// Standard vocabulary with the catch-all `any` option in front.
    pub fn with_any() -> Self {
        let mut vocabulary = Self::standard();
        vocabulary.options.insert(0, ProductTag::Any);
        vocabulary
    }

    pub fn options(&self) -> &[ProductTag] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn position(&self, tag: ProductTag) -> Option<usize> {
        self.options.iter().position(|option| *option == tag)
    }

    pub fn position_of_slug(&self, slug: &str) -> Option<usize> {
        ProductTag::from_slug(slug).and_then(|tag| self.position(tag))
    }
}
