//! Entity records and the client-supplied payloads that produce them.
//!
//! Each kind has a stored record (server-assigned `id` and timestamps
//! included), an `Insert*` payload parsed from a create body, and - where the
//! API allows updates - a `*Patch` payload in which every field is optional
//! and only the supplied fields are applied over the existing record.

pub mod fields;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fields::{Fields, ValidationError};

// ---------------------------------------------------------------------------
// Blog posts

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    /// Stamped at creation, immutable thereafter.
    pub published_at: DateTime<Utc>,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: String,
    pub featured: bool,
}

impl InsertBlogPost {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let title = f.req_string("title");
        let slug = f.req_string("slug");
        let excerpt = f.req_string("excerpt");
        let content = f.req_string("content");
        let image_url = f.req_string("imageUrl");
        let featured = f.bool_or("featured", false);
        f.finish()?;
        Ok(Self { title, slug, excerpt, content, image_url, featured })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

impl BlogPostPatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            title: f.opt_string("title"),
            slug: f.opt_string("slug"),
            excerpt: f.opt_string("excerpt"),
            content: f.opt_string("content"),
            image_url: f.opt_string("imageUrl"),
            featured: f.opt_bool("featured"),
        };
        f.finish()?;
        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Contact messages (append-only)

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl InsertContact {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let name = f.req_string("name");
        let email = f.req_string("email");
        let phone = f.opt_string("phone");
        let subject = f.req_string("subject");
        let message = f.req_string("message");
        f.finish()?;
        Ok(Self { name, email, phone, subject, message })
    }
}

// ---------------------------------------------------------------------------
// Testimonials

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub location: String,
    /// Free-text name of the workshop attended, not a foreign key.
    pub workshop: String,
    pub rating: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertTestimonial {
    pub name: String,
    pub location: String,
    pub workshop: String,
    pub rating: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl InsertTestimonial {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let name = f.req_string("name");
        let location = f.req_string("location");
        let workshop = f.req_string("workshop");
        let rating = f.req_i64_range("rating", 1, 5);
        let content = f.req_string("content");
        let image_url = f.opt_string("imageUrl");
        let featured = f.bool_or("featured", false);
        f.finish()?;
        Ok(Self { name, location, workshop, rating, content, image_url, featured })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub workshop: Option<String>,
    pub rating: Option<i64>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

impl TestimonialPatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            name: f.opt_string("name"),
            location: f.opt_string("location"),
            workshop: f.opt_string("workshop"),
            rating: f.opt_i64_range("rating", 1, 5),
            content: f.opt_string("content"),
            image_url: f.opt_string("imageUrl"),
            featured: f.opt_bool("featured"),
        };
        f.finish()?;
        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Workshop packages

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopPackage {
    pub id: i64,
    pub name: String,
    /// Smallest currency unit (IDR, no decimals).
    pub price: i64,
    pub duration: String,
    pub description: String,
    pub features: Vec<String>,
    pub max_participants: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertWorkshopPackage {
    pub name: String,
    pub price: i64,
    pub duration: String,
    pub description: String,
    pub features: Vec<String>,
    pub max_participants: i64,
    pub is_active: bool,
}

impl InsertWorkshopPackage {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let name = f.req_string("name");
        let price = f.req_i64_min("price", 0);
        let duration = f.req_string("duration");
        let description = f.req_string("description");
        let features = f.req_string_array("features");
        let max_participants = f.req_i64_min("maxParticipants", 1);
        let is_active = f.bool_or("isActive", true);
        f.finish()?;
        Ok(Self { name, price, duration, description, features, max_participants, is_active })
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkshopPackagePatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub max_participants: Option<i64>,
    pub is_active: Option<bool>,
}

impl WorkshopPackagePatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            name: f.opt_string("name"),
            price: f.opt_i64_min("price", 0),
            duration: f.opt_string("duration"),
            description: f.opt_string("description"),
            features: f.opt_string_array("features"),
            max_participants: f.opt_i64_min("maxParticipants", 1),
            is_active: f.opt_bool("isActive"),
        };
        f.finish()?;
        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Team members

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image_url: String,
    pub social_media: Option<Value>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertTeamMember {
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image_url: String,
    pub social_media: Option<Value>,
    pub display_order: i64,
    pub is_active: bool,
}

impl InsertTeamMember {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let name = f.req_string("name");
        let position = f.req_string("position");
        let bio = f.req_string("bio");
        let image_url = f.req_string("imageUrl");
        let social_media = f.opt_object("socialMedia");
        let display_order = f.i64_or("displayOrder", 0);
        let is_active = f.bool_or("isActive", true);
        f.finish()?;
        Ok(Self { name, position, bio, image_url, social_media, display_order, is_active })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub social_media: Option<Value>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

impl TeamMemberPatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            name: f.opt_string("name"),
            position: f.opt_string("position"),
            bio: f.opt_string("bio"),
            image_url: f.opt_string("imageUrl"),
            social_media: f.opt_object("socialMedia"),
            display_order: f.opt_i64("displayOrder"),
            is_active: f.opt_bool("isActive"),
        };
        f.finish()?;
        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Site settings (keyed by string, upsert-only)

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    #[default]
    Text,
    Number,
    Boolean,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSetting {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: SettingType,
    /// Bumped on every upsert of the same key.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertSiteSetting {
    pub key: String,
    pub value: String,
    pub kind: SettingType,
}

impl InsertSiteSetting {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let key = f.req_string("key");
        let setting_value = f.req_string("value");
        let kind = f.req_enum::<SettingType>("type");
        f.finish()?;
        Ok(Self { key, value: setting_value, kind })
    }
}

// ---------------------------------------------------------------------------
// Promo popups

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromoType {
    #[default]
    Popup,
    NotificationBar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoPopup {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: PromoType,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertPromoPopup {
    pub title: String,
    pub content: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image_url: Option<String>,
    pub kind: PromoType,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl InsertPromoPopup {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let title = f.req_string("title");
        let content = f.req_string("content");
        let button_text = f.opt_string("buttonText");
        let button_link = f.opt_string("buttonLink");
        let image_url = f.opt_string("imageUrl");
        let kind = f.req_enum::<PromoType>("type");
        let is_active = f.bool_or("isActive", false);
        let start_date = f.opt_datetime("startDate");
        let end_date = f.opt_datetime("endDate");
        f.finish()?;
        Ok(Self {
            title,
            content,
            button_text,
            button_link,
            image_url,
            kind,
            is_active,
            start_date,
            end_date,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromoPopupPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<PromoType>,
    pub is_active: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl PromoPopupPatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            title: f.opt_string("title"),
            content: f.opt_string("content"),
            button_text: f.opt_string("buttonText"),
            button_link: f.opt_string("buttonLink"),
            image_url: f.opt_string("imageUrl"),
            kind: f.opt_enum::<PromoType>("type"),
            is_active: f.opt_bool("isActive"),
            start_date: f.opt_datetime("startDate"),
            end_date: f.opt_datetime("endDate"),
        };
        f.finish()?;
        Ok(patch)
    }
}

// ---------------------------------------------------------------------------
// Export categories

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub products: Vec<String>,
    /// Minimum order quantity, free text ("500 pcs").
    pub moq: String,
    pub price_range: String,
    pub image_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertExportCategory {
    pub name: String,
    pub description: String,
    pub products: Vec<String>,
    pub moq: String,
    pub price_range: String,
    pub image_url: Option<String>,
    pub display_order: i64,
    pub is_active: bool,
}

impl InsertExportCategory {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let name = f.req_string("name");
        let description = f.req_string("description");
        let products = f.req_string_array("products");
        let moq = f.req_string("moq");
        let price_range = f.req_string("priceRange");
        let image_url = f.opt_string("imageUrl");
        let display_order = f.i64_or("displayOrder", 0);
        let is_active = f.bool_or("isActive", true);
        f.finish()?;
        Ok(Self { name, description, products, moq, price_range, image_url, display_order, is_active })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExportCategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub products: Option<Vec<String>>,
    pub moq: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i64>,
    pub is_active: Option<bool>,
}

impl ExportCategoryPatch {
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let mut f = Fields::new(value)?;
        let patch = Self {
            name: f.opt_string("name"),
            description: f.opt_string("description"),
            products: f.opt_string_array("products"),
            moq: f.opt_string("moq"),
            price_range: f.opt_string("priceRange"),
            image_url: f.opt_string("imageUrl"),
            display_order: f.opt_i64("displayOrder"),
            is_active: f.opt_bool("isActive"),
        };
        f.finish()?;
        Ok(patch)
    }
}
