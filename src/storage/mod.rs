//! In-memory record store, the authoritative state for every entity kind.
//!
//! `MemStorage` is constructed once at process start and shared through the
//! router state; tests build isolated instances. Each kind owns a locked
//! table with its own monotonic id counter so concurrent requests cannot
//! interleave counter increments with writes. Nothing here survives a
//! restart, which is an accepted property of this deployment.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::schema::{
    BlogPost, BlogPostPatch, Contact, ExportCategory, ExportCategoryPatch, InsertBlogPost,
    InsertContact, InsertExportCategory, InsertPromoPopup, InsertSiteSetting, InsertTeamMember,
    InsertTestimonial, InsertWorkshopPackage, PromoPopup, PromoPopupPatch, SiteSetting,
    TeamMember, TeamMemberPatch, Testimonial, TestimonialPatch, WorkshopPackage,
    WorkshopPackagePatch,
};

const KIND_BLOG_POST: &str = "Blog post";
const KIND_TESTIMONIAL: &str = "Testimonial";
const KIND_PACKAGE: &str = "Workshop package";
const KIND_TEAM_MEMBER: &str = "Team member";
const KIND_PROMO: &str = "Promo";
const KIND_EXPORT_CATEGORY: &str = "Export category";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("blog post slug '{0}' already exists")]
    DuplicateSlug(String),
}

/// Id-keyed rows plus the next-id counter. Ids start at 1 and are never
/// reused, even after deletes.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self { rows: BTreeMap::new(), next_id: 1 }
    }

    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn update_with(
        &mut self,
        id: i64,
        kind: &'static str,
        apply: impl FnOnce(&mut T),
    ) -> Result<T, StorageError> {
        let row = self.rows.get_mut(&id).ok_or(StorageError::NotFound(kind))?;
        apply(row);
        Ok(row.clone())
    }

    fn remove(&mut self, id: i64, kind: &'static str) -> Result<(), StorageError> {
        self.rows.remove(&id).map(|_| ()).ok_or(StorageError::NotFound(kind))
    }
}

/// A poisoned lock only means a panic happened mid-write on a plain map;
/// the data itself is still usable, so recover the guard.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct MemStorage {
    blog_posts: Mutex<Table<BlogPost>>,
    contacts: Mutex<Table<Contact>>,
    testimonials: Mutex<Table<Testimonial>>,
    packages: Mutex<Table<WorkshopPackage>>,
    team: Mutex<Table<TeamMember>>,
    promos: Mutex<Table<PromoPopup>>,
    export_categories: Mutex<Table<ExportCategory>>,
    settings: Mutex<BTreeMap<String, SiteSetting>>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            blog_posts: Mutex::new(Table::new()),
            contacts: Mutex::new(Table::new()),
            testimonials: Mutex::new(Table::new()),
            packages: Mutex::new(Table::new()),
            team: Mutex::new(Table::new()),
            promos: Mutex::new(Table::new()),
            export_categories: Mutex::new(Table::new()),
            settings: Mutex::new(BTreeMap::new()),
        }
    }

    /// Store pre-loaded with the launch blog posts, used by the server
    /// binary. Tests build `MemStorage::new()` for a clean slate.
    pub fn with_sample_posts() -> Self {
        let store = Self::new();
        let samples = [
            InsertBlogPost {
                title: "5 Essential Oil Terbaik untuk Relaksasi".to_string(),
                slug: "5-essential-oil-terbaik-untuk-relaksasi".to_string(),
                excerpt: "Pelajari jenis-jenis essential oil yang paling efektif untuk menciptakan suasana relaksasi dan menenangkan pikiran.".to_string(),
                content: "<p>Aromaterapi telah lama dikenal sebagai salah satu cara alami untuk menciptakan suasana relaksasi. Lavender, chamomile, bergamot, ylang ylang dan sandalwood adalah lima essential oil terbaik untuk ketenangan pikiran.</p><p>Dalam workshop WeisCandle, Anda akan belajar cara memadukan essential oil ini untuk menciptakan lilin aromaterapi yang sempurna sesuai kebutuhan Anda.</p>".to_string(),
                image_url: "https://images.unsplash.com/photo-1608571423902-eed4a5ad8108?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                featured: true,
            },
            InsertBlogPost {
                title: "Tips Memilih Wax Berkualitas untuk Lilin".to_string(),
                slug: "tips-memilih-wax-berkualitas-untuk-lilin".to_string(),
                excerpt: "Panduan lengkap memilih jenis wax yang tepat untuk menciptakan lilin aromaterapi dengan hasil optimal dan tahan lama.".to_string(),
                content: "<p>Kualitas wax adalah faktor utama yang menentukan hasil akhir lilin aromaterapi Anda. Soy wax mudah digunakan dan ramah lingkungan, beeswax memberikan aroma natural, dan coconut wax memberikan hasil pembakaran paling bersih.</p><p>Di workshop WeisCandle, kami hanya menggunakan wax berkualitas premium untuk memastikan hasil yang optimal.</p>".to_string(),
                image_url: "https://images.unsplash.com/photo-1574361034536-9e0a5b05b6b2?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                featured: false,
            },
            InsertBlogPost {
                title: "Cara Memulai Bisnis Lilin Aromaterapi".to_string(),
                slug: "cara-memulai-bisnis-lilin-aromaterapi".to_string(),
                excerpt: "Strategi dan tips praktis untuk memulai bisnis lilin aromaterapi dari nol hingga sukses mendapatkan pelanggan.".to_string(),
                content: "<p>Bisnis lilin aromaterapi memiliki potensi yang sangat besar di Indonesia. Mulailah dengan riset pasar, tentukan niche Anda, dan siapkan modal awal Rp 5-15 juta untuk peralatan dasar, bahan baku, dan marketing awal.</p><p>Workshop Professional WeisCandle memberikan panduan lengkap business planning untuk memastikan kesuksesan bisnis Anda.</p>".to_string(),
                image_url: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                featured: true,
            },
        ];
        for insert in samples {
            // Slugs above are distinct, so seeding cannot fail
            if let Err(err) = store.create_blog_post(insert) {
                tracing::error!(error = %err, "failed to seed sample blog post");
            }
        }
        store
    }

    // -- Blog posts ---------------------------------------------------------

    pub fn create_blog_post(&self, insert: InsertBlogPost) -> Result<BlogPost, StorageError> {
        let mut table = lock(&self.blog_posts);
        if table.rows.values().any(|p| p.slug == insert.slug) {
            return Err(StorageError::DuplicateSlug(insert.slug));
        }
        Ok(table.insert_with(|id| BlogPost {
            id,
            title: insert.title,
            slug: insert.slug,
            excerpt: insert.excerpt,
            content: insert.content,
            image_url: insert.image_url,
            published_at: Utc::now(),
            featured: insert.featured,
        }))
    }

    /// Most recent first.
    pub fn blog_posts(&self) -> Vec<BlogPost> {
        let mut posts = lock(&self.blog_posts).all();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    pub fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        lock(&self.blog_posts).rows.values().find(|p| p.slug == slug).cloned()
    }

    pub fn update_blog_post(
        &self,
        id: i64,
        patch: BlogPostPatch,
    ) -> Result<BlogPost, StorageError> {
        let mut table = lock(&self.blog_posts);
        if let Some(slug) = &patch.slug {
            if table.rows.values().any(|p| p.id != id && &p.slug == slug) {
                return Err(StorageError::DuplicateSlug(slug.clone()));
            }
        }
        // published_at is stamped at creation and never patched
        table.update_with(id, KIND_BLOG_POST, |post| {
            if let Some(v) = patch.title {
                post.title = v;
            }
            if let Some(v) = patch.slug {
                post.slug = v;
            }
            if let Some(v) = patch.excerpt {
                post.excerpt = v;
            }
            if let Some(v) = patch.content {
                post.content = v;
            }
            if let Some(v) = patch.image_url {
                post.image_url = v;
            }
            if let Some(v) = patch.featured {
                post.featured = v;
            }
        })
    }

    pub fn delete_blog_post(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.blog_posts).remove(id, KIND_BLOG_POST)
    }

    // -- Contacts (append-only) ---------------------------------------------

    pub fn create_contact(&self, insert: InsertContact) -> Contact {
        lock(&self.contacts).insert_with(|id| Contact {
            id,
            name: insert.name,
            email: insert.email,
            phone: insert.phone,
            subject: insert.subject,
            message: insert.message,
            created_at: Utc::now(),
        })
    }

    /// Newest first.
    pub fn contacts(&self) -> Vec<Contact> {
        let mut contacts = lock(&self.contacts).all();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        contacts
    }

    // -- Testimonials -------------------------------------------------------

    pub fn create_testimonial(&self, insert: InsertTestimonial) -> Testimonial {
        lock(&self.testimonials).insert_with(|id| Testimonial {
            id,
            name: insert.name,
            location: insert.location,
            workshop: insert.workshop,
            rating: insert.rating,
            content: insert.content,
            image_url: insert.image_url,
            featured: insert.featured,
            created_at: Utc::now(),
        })
    }

    pub fn testimonials(&self) -> Vec<Testimonial> {
        lock(&self.testimonials).all()
    }

    pub fn update_testimonial(
        &self,
        id: i64,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, StorageError> {
        lock(&self.testimonials).update_with(id, KIND_TESTIMONIAL, |row| {
            if let Some(v) = patch.name {
                row.name = v;
            }
            if let Some(v) = patch.location {
                row.location = v;
            }
            if let Some(v) = patch.workshop {
                row.workshop = v;
            }
            if let Some(v) = patch.rating {
                row.rating = v;
            }
            if let Some(v) = patch.content {
                row.content = v;
            }
            if let Some(v) = patch.image_url {
                row.image_url = Some(v);
            }
            if let Some(v) = patch.featured {
                row.featured = v;
            }
        })
    }

    pub fn delete_testimonial(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.testimonials).remove(id, KIND_TESTIMONIAL)
    }

    // -- Workshop packages --------------------------------------------------

    pub fn create_workshop_package(&self, insert: InsertWorkshopPackage) -> WorkshopPackage {
        lock(&self.packages).insert_with(|id| WorkshopPackage {
            id,
            name: insert.name,
            price: insert.price,
            duration: insert.duration,
            description: insert.description,
            features: insert.features,
            max_participants: insert.max_participants,
            is_active: insert.is_active,
        })
    }

    pub fn workshop_packages(&self) -> Vec<WorkshopPackage> {
        lock(&self.packages).all()
    }

    pub fn update_workshop_package(
        &self,
        id: i64,
        patch: WorkshopPackagePatch,
    ) -> Result<WorkshopPackage, StorageError> {
        lock(&self.packages).update_with(id, KIND_PACKAGE, |row| {
            if let Some(v) = patch.name {
                row.name = v;
            }
            if let Some(v) = patch.price {
                row.price = v;
            }
            if let Some(v) = patch.duration {
                row.duration = v;
            }
            if let Some(v) = patch.description {
                row.description = v;
            }
            if let Some(v) = patch.features {
                row.features = v;
            }
            if let Some(v) = patch.max_participants {
                row.max_participants = v;
            }
            if let Some(v) = patch.is_active {
                row.is_active = v;
            }
        })
    }

    pub fn delete_workshop_package(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.packages).remove(id, KIND_PACKAGE)
    }

    // -- Team members -------------------------------------------------------

    pub fn create_team_member(&self, insert: InsertTeamMember) -> TeamMember {
        lock(&self.team).insert_with(|id| TeamMember {
            id,
            name: insert.name,
            position: insert.position,
            bio: insert.bio,
            image_url: insert.image_url,
            social_media: insert.social_media,
            display_order: insert.display_order,
            is_active: insert.is_active,
        })
    }

    pub fn team_members(&self) -> Vec<TeamMember> {
        lock(&self.team).all()
    }

    pub fn update_team_member(
        &self,
        id: i64,
        patch: TeamMemberPatch,
    ) -> Result<TeamMember, StorageError> {
        lock(&self.team).update_with(id, KIND_TEAM_MEMBER, |row| {
            if let Some(v) = patch.name {
                row.name = v;
            }
            if let Some(v) = patch.position {
                row.position = v;
            }
            if let Some(v) = patch.bio {
                row.bio = v;
            }
            if let Some(v) = patch.image_url {
                row.image_url = v;
            }
            if let Some(v) = patch.social_media {
                row.social_media = Some(v);
            }
            if let Some(v) = patch.display_order {
                row.display_order = v;
            }
            if let Some(v) = patch.is_active {
                row.is_active = v;
            }
        })
    }

    pub fn delete_team_member(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.team).remove(id, KIND_TEAM_MEMBER)
    }

    // -- Promo popups -------------------------------------------------------

    pub fn create_promo(&self, insert: InsertPromoPopup) -> PromoPopup {
        lock(&self.promos).insert_with(|id| PromoPopup {
            id,
            title: insert.title,
            content: insert.content,
            button_text: insert.button_text,
            button_link: insert.button_link,
            image_url: insert.image_url,
            kind: insert.kind,
            is_active: insert.is_active,
            start_date: insert.start_date,
            end_date: insert.end_date,
            created_at: Utc::now(),
        })
    }

    pub fn promos(&self) -> Vec<PromoPopup> {
        lock(&self.promos).all()
    }

    /// Display-eligible promos: the active flag is set and `now` falls inside
    /// the optional [startDate, endDate] window. Recomputed on every call.
    pub fn active_promos(&self, now: DateTime<Utc>) -> Vec<PromoPopup> {
        lock(&self.promos)
            .rows
            .values()
            .filter(|p| {
                p.is_active
                    && p.start_date.map_or(true, |start| start <= now)
                    && p.end_date.map_or(true, |end| end >= now)
            })
            .cloned()
            .collect()
    }

    pub fn update_promo(
        &self,
        id: i64,
        patch: PromoPopupPatch,
    ) -> Result<PromoPopup, StorageError> {
        lock(&self.promos).update_with(id, KIND_PROMO, |row| {
            if let Some(v) = patch.title {
                row.title = v;
            }
            if let Some(v) = patch.content {
                row.content = v;
            }
            if let Some(v) = patch.button_text {
                row.button_text = Some(v);
            }
            if let Some(v) = patch.button_link {
                row.button_link = Some(v);
            }
            if let Some(v) = patch.image_url {
                row.image_url = Some(v);
            }
            if let Some(v) = patch.kind {
                row.kind = v;
            }
            if let Some(v) = patch.is_active {
                row.is_active = v;
            }
            if let Some(v) = patch.start_date {
                row.start_date = Some(v);
            }
            if let Some(v) = patch.end_date {
                row.end_date = Some(v);
            }
        })
    }

    pub fn delete_promo(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.promos).remove(id, KIND_PROMO)
    }

    // -- Export categories --------------------------------------------------

    pub fn create_export_category(&self, insert: InsertExportCategory) -> ExportCategory {
        lock(&self.export_categories).insert_with(|id| ExportCategory {
            id,
            name: insert.name,
            description: insert.description,
            products: insert.products,
            moq: insert.moq,
            price_range: insert.price_range,
            image_url: insert.image_url,
            display_order: insert.display_order,
            is_active: insert.is_active,
        })
    }

    pub fn export_categories(&self) -> Vec<ExportCategory> {
        lock(&self.export_categories).all()
    }

    pub fn update_export_category(
        &self,
        id: i64,
        patch: ExportCategoryPatch,
    ) -> Result<ExportCategory, StorageError> {
        lock(&self.export_categories).update_with(id, KIND_EXPORT_CATEGORY, |row| {
            if let Some(v) = patch.name {
                row.name = v;
            }
            if let Some(v) = patch.description {
                row.description = v;
            }
            if let Some(v) = patch.products {
                row.products = v;
            }
            if let Some(v) = patch.moq {
                row.moq = v;
            }
            if let Some(v) = patch.price_range {
                row.price_range = v;
            }
            if let Some(v) = patch.image_url {
                row.image_url = Some(v);
            }
            if let Some(v) = patch.display_order {
                row.display_order = v;
            }
            if let Some(v) = patch.is_active {
                row.is_active = v;
            }
        })
    }

    pub fn delete_export_category(&self, id: i64) -> Result<(), StorageError> {
        lock(&self.export_categories).remove(id, KIND_EXPORT_CATEGORY)
    }

    // -- Site settings (keyed by string, upsert-only) -----------------------

    pub fn site_settings(&self) -> Vec<SiteSetting> {
        lock(&self.settings).values().cloned().collect()
    }

    pub fn site_setting(&self, key: &str) -> Option<SiteSetting> {
        lock(&self.settings).get(key).cloned()
    }

    /// Writing an existing key replaces its value and bumps `updatedAt`.
    pub fn upsert_site_setting(&self, insert: InsertSiteSetting) -> SiteSetting {
        let setting = SiteSetting {
            key: insert.key.clone(),
            value: insert.value,
            kind: insert.kind,
            updated_at: Utc::now(),
        };
        lock(&self.settings).insert(insert.key, setting.clone());
        setting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{PromoType, SettingType};
    use chrono::Duration;
    use serde_json::json;

    fn package_insert(name: &str) -> InsertWorkshopPackage {
        InsertWorkshopPackage {
            name: name.to_string(),
            price: 350000,
            duration: "3 hours".to_string(),
            description: "Intro class".to_string(),
            features: vec!["wax".to_string(), "wick".to_string()],
            max_participants: 15,
            is_active: true,
        }
    }

    fn post_insert(slug: &str) -> InsertBlogPost {
        InsertBlogPost {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            excerpt: "e".to_string(),
            content: "c".to_string(),
            image_url: "https://example.com/x.jpg".to_string(),
            featured: false,
        }
    }

    fn promo_insert(active: bool) -> InsertPromoPopup {
        InsertPromoPopup {
            title: "Sale".to_string(),
            content: "20% off".to_string(),
            button_text: None,
            button_link: None,
            image_url: None,
            kind: PromoType::Popup,
            is_active: active,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn create_assigns_sequential_ids_starting_at_one() {
        let store = MemStorage::new();
        let a = store.create_workshop_package(package_insert("A"));
        let b = store.create_workshop_package(package_insert("B"));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = MemStorage::new();
        let a = store.create_workshop_package(package_insert("A"));
        store.delete_workshop_package(a.id).unwrap();
        let b = store.create_workshop_package(package_insert("B"));
        assert_eq!(b.id, 2);
    }

    #[test]
    fn create_then_read_returns_input_plus_assigned_fields() {
        let store = MemStorage::new();
        let created = store.create_workshop_package(package_insert("Basic"));
        let listed = store.workshop_packages();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.name, "Basic");
        assert_eq!(created.price, 350000);
    }

    #[test]
    fn update_applies_patch_and_preserves_other_fields() {
        let store = MemStorage::new();
        let created = store.create_workshop_package(package_insert("Basic"));
        let updated = store
            .update_workshop_package(
                created.id,
                WorkshopPackagePatch { is_active: Some(false), ..Default::default() },
            )
            .unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.name, "Basic");
        assert_eq!(updated.features, created.features);
        assert_eq!(store.workshop_packages()[0], updated);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = MemStorage::new();
        let err = store.update_workshop_package(99, Default::default()).unwrap_err();
        assert!(matches!(err, StorageError::NotFound("Workshop package")));
    }

    #[test]
    fn delete_is_idempotent_failure_not_a_crash() {
        let store = MemStorage::new();
        let created = store.create_testimonial(InsertTestimonial {
            name: "N".to_string(),
            location: "Jakarta".to_string(),
            workshop: "Basic".to_string(),
            rating: 5,
            content: "Great".to_string(),
            image_url: None,
            featured: false,
        });
        store.delete_testimonial(created.id).unwrap();
        assert!(matches!(
            store.delete_testimonial(created.id),
            Err(StorageError::NotFound("Testimonial"))
        ));
    }

    #[test]
    fn blog_posts_sorted_descending_by_published_at() {
        let store = MemStorage::new();
        for slug in ["first", "second", "third"] {
            store.create_blog_post(post_insert(slug)).unwrap();
        }
        let posts = store.blog_posts();
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn blog_slug_lookup_and_uniqueness() {
        let store = MemStorage::new();
        store.create_blog_post(post_insert("hello")).unwrap();
        assert!(store.blog_post_by_slug("hello").is_some());
        assert!(store.blog_post_by_slug("missing").is_none());
        assert!(matches!(
            store.create_blog_post(post_insert("hello")),
            Err(StorageError::DuplicateSlug(_))
        ));
    }

    #[test]
    fn blog_update_rejects_slug_taken_by_another_post() {
        let store = MemStorage::new();
        let a = store.create_blog_post(post_insert("a")).unwrap();
        store.create_blog_post(post_insert("b")).unwrap();
        let err = store
            .update_blog_post(
                a.id,
                BlogPostPatch { slug: Some("b".to_string()), ..Default::default() },
            )
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateSlug(_)));

        // Re-submitting a post's own slug is fine
        let same = store
            .update_blog_post(
                a.id,
                BlogPostPatch { slug: Some("a".to_string()), ..Default::default() },
            )
            .unwrap();
        assert_eq!(same.slug, "a");
    }

    #[test]
    fn blog_update_preserves_published_at() {
        let store = MemStorage::new();
        let created = store.create_blog_post(post_insert("keep")).unwrap();
        let updated = store
            .update_blog_post(
                created.id,
                BlogPostPatch { title: Some("New title".to_string()), ..Default::default() },
            )
            .unwrap();
        assert_eq!(updated.published_at, created.published_at);
    }

    #[test]
    fn contacts_sorted_newest_first() {
        let store = MemStorage::new();
        for subject in ["one", "two"] {
            store.create_contact(InsertContact {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                phone: None,
                subject: subject.to_string(),
                message: "M".to_string(),
            });
        }
        let contacts = store.contacts();
        assert!(contacts[0].created_at >= contacts[1].created_at);
        assert_eq!(contacts[0].phone, None);
    }

    #[test]
    fn active_promos_respect_the_date_window() {
        let store = MemStorage::new();
        let now = Utc::now();

        // Unbounded active promo: always shown
        store.create_promo(promo_insert(true));
        // Inactive flag: never shown
        store.create_promo(promo_insert(false));
        // Ended yesterday: excluded even though the flag is set
        store.create_promo(InsertPromoPopup {
            end_date: Some(now - Duration::days(1)),
            ..promo_insert(true)
        });
        // Starts tomorrow: excluded even though the flag is set
        store.create_promo(InsertPromoPopup {
            start_date: Some(now + Duration::days(1)),
            ..promo_insert(true)
        });
        // In-window promo: shown
        store.create_promo(InsertPromoPopup {
            start_date: Some(now - Duration::days(1)),
            end_date: Some(now + Duration::days(1)),
            ..promo_insert(true)
        });

        let active: Vec<i64> = store.active_promos(now).iter().map(|p| p.id).collect();
        assert_eq!(active, vec![1, 5]);
    }

    #[test]
    fn site_setting_upsert_replaces_value_and_bumps_updated_at() {
        let store = MemStorage::new();
        let first = store.upsert_site_setting(InsertSiteSetting {
            key: "hero_title".to_string(),
            value: "WeisCandle".to_string(),
            kind: SettingType::Text,
        });
        let second = store.upsert_site_setting(InsertSiteSetting {
            key: "hero_title".to_string(),
            value: "WeisCandle Studio".to_string(),
            kind: SettingType::Text,
        });
        assert_eq!(store.site_settings().len(), 1);
        assert_eq!(store.site_setting("hero_title").unwrap().value, "WeisCandle Studio");
        assert!(second.updated_at >= first.updated_at);
    }

    #[test]
    fn team_member_patch_merges_structured_social_media() {
        let store = MemStorage::new();
        let member = store.create_team_member(InsertTeamMember {
            name: "Dewi".to_string(),
            position: "Founder".to_string(),
            bio: "b".to_string(),
            image_url: "u".to_string(),
            social_media: None,
            display_order: 1,
            is_active: true,
        });
        let updated = store
            .update_team_member(
                member.id,
                TeamMemberPatch {
                    social_media: Some(json!({ "instagram": "@weiscandle" })),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.social_media, Some(json!({ "instagram": "@weiscandle" })));
        assert_eq!(updated.name, "Dewi");
    }
}
