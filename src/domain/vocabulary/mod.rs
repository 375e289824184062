//! Vocabulary - Keyword tables for products, usage contexts, and features.
//!
//! A `Vocabulary` is built once and passed by reference into every component
//! that matches text. The built-in tables are available through
//! [`Vocabulary::standard`]; tests and embedders can assemble their own with
//! the `with_*` builders to substitute keywords.

mod tables;
pub mod text;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ProductType, UsageContext};

/// How a product keyword relates to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// A full product word, such as "headphones".
    Keyword,
    /// A shorthand, brand, or abbreviation, such as "tws" or "dslr".
    Abbreviation,
}

/// A keyword that identifies a product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductKeyword {
    pub product: ProductType,
    pub keyword: String,
    pub kind: MatchKind,
}

/// A keyword that identifies a usage context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextKeyword {
    pub context: UsageContext,
    pub keyword: String,
}

/// A canonical feature name plus the aliases that map onto it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDefinition {
    pub canonical: String,
    pub aliases: Vec<String>,
}

impl FeatureDefinition {
    /// Every spelling that resolves to this feature, canonical first.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

static STANDARD: Lazy<Vocabulary> = Lazy::new(Vocabulary::build_standard);

/// Immutable keyword tables shared by extraction, analysis, and response parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    products: Vec<ProductKeyword>,
    contexts: Vec<ContextKeyword>,
    features: Vec<FeatureDefinition>,
    relevant_features: BTreeMap<ProductType, Vec<String>>,
}

impl Vocabulary {
    /// The built-in tables, constructed once per process.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// An empty vocabulary; populate it with the `with_*` builders.
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            contexts: Vec::new(),
            features: Vec::new(),
            relevant_features: BTreeMap::new(),
        }
    }

    fn build_standard() -> Self {
        let mut vocabulary = Self::empty();
        for (product, keyword, kind) in tables::PRODUCT_KEYWORDS {
            vocabulary = vocabulary.with_product_keyword(*product, keyword, *kind);
        }
        for (context, keyword) in tables::CONTEXT_KEYWORDS {
            vocabulary = vocabulary.with_context_keyword(*context, keyword);
        }
        for (canonical, aliases) in tables::FEATURES {
            vocabulary = vocabulary.with_feature(canonical, aliases);
        }
        for product in ProductType::all() {
            vocabulary =
                vocabulary.with_relevant_features(*product, tables::relevant_features(*product));
        }
        vocabulary
    }

    /// Adds a product keyword.
    pub fn with_product_keyword(
        mut self,
        product: ProductType,
        keyword: &str,
        kind: MatchKind,
    ) -> Self {
        self.products.push(ProductKeyword {
            product,
            keyword: text::normalize(keyword),
            kind,
        });
        self
    }

    /// Adds a usage context keyword.
    pub fn with_context_keyword(mut self, context: UsageContext, keyword: &str) -> Self {
        self.contexts.push(ContextKeyword {
            context,
            keyword: text::normalize(keyword),
        });
        self
    }

    /// Adds a feature with its aliases.
    pub fn with_feature(mut self, canonical: &str, aliases: &[&str]) -> Self {
        self.features.push(FeatureDefinition {
            canonical: text::normalize(canonical),
            aliases: aliases.iter().map(|a| text::normalize(a)).collect(),
        });
        self
    }

    /// Sets the features suggested for a product type.
    pub fn with_relevant_features(mut self, product: ProductType, features: &[&str]) -> Self {
        self.relevant_features.insert(
            product,
            features.iter().map(|f| text::normalize(f)).collect(),
        );
        self
    }

    pub fn product_keywords(&self) -> &[ProductKeyword] {
        &self.products
    }

    pub fn context_keywords(&self) -> &[ContextKeyword] {
        &self.contexts
    }

    pub fn features(&self) -> &[FeatureDefinition] {
        &self.features
    }

    /// Canonical feature names in table order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.canonical.as_str()).collect()
    }

    /// Features to suggest for a product, or the whole vocabulary when the
    /// product is unknown or has no relevance list.
    pub fn features_for(&self, product: Option<ProductType>) -> Vec<&str> {
        match product.and_then(|p| self.relevant_features.get(&p)) {
            Some(relevant) if !relevant.is_empty() => {
                relevant.iter().map(String::as_str).collect()
            }
            _ => self.feature_names(),
        }
    }

    /// Resolves a whole answer such as "Earphones" or "tablet" to a product.
    pub fn lookup_product(&self, token: &str) -> Option<ProductType> {
        let normalized = text::normalize(token);
        if let Ok(product) = normalized.parse::<ProductType>() {
            return Some(product);
        }
        self.products
            .iter()
            .find(|k| k.keyword == normalized)
            .map(|k| k.product)
    }

    /// Resolves a single answer token such as "workout" to a usage context.
    pub fn lookup_context(&self, token: &str) -> Option<UsageContext> {
        let normalized = text::normalize(token);
        if let Ok(context) = normalized.parse::<UsageContext>() {
            return Some(context);
        }
        self.contexts
            .iter()
            .find(|k| k.keyword == normalized)
            .map(|k| k.context)
    }

    /// Resolves a feature spelling to its canonical name.
    pub fn canonical_feature(&self, token: &str) -> Option<&str> {
        let normalized = text::normalize(token);
        self.features
            .iter()
            .find(|f| f.spellings().any(|s| s == normalized))
            .map(|f| f.canonical.as_str())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard().clone()
    }
}
