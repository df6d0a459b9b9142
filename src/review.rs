use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::admin::AdminSession;
use crate::email::{review_created, review_deleted, EmailError, TemplateParams};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A testimonial as stored in the browser.
///
/// Field names match the JSON already sitting in visitors' local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub company: String,
    #[serde(deserialize_with = "clamped_rating")]
    pub rating: u8,
}

// Hand-edited storage can hold any number here; pin it into 1..=5.
fn clamped_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(MIN_RATING);
    }
    Ok(raw.round().clamp(MIN_RATING as f64, MAX_RATING as f64) as u8)
}

/// The local storage payload: a JSON array of reviews.
///
/// Entries that don't decode are dropped one by one instead of failing the
/// whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredReviews(#[serde(deserialize_with = "lenient_reviews")] pub Vec<Review>);

fn lenient_reviews<'de, D>(deserializer: D) -> Result<Vec<Review>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<Review>(v) {
            Ok(r) => Some(r),
            Err(e) => {
                log::warn!("skipping stored review: {e}");
                None
            }
        })
        .collect())
}

/// Review form input before it gets an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewReview {
    pub text: String,
    pub author: String,
    pub company: String,
    pub rating: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("El campo {0} es obligatorio")]
    MissingField(&'static str),
    #[error("Calificación fuera de rango: {0}")]
    InvalidRating(u8),
    #[error("Solo el administrador puede eliminar reseñas")]
    Unauthorized,
    #[error("Reseña {0} no encontrada")]
    NotFound(i64),
    #[error("No quedan identificadores de reseña disponibles")]
    IdsExhausted,
}

/// Side effects of a board change: write the list back, send an email.
pub trait ReviewSink {
    fn persist(&mut self, reviews: &[Review]);
    fn notify(&mut self, params: TemplateParams) -> Result<(), EmailError>;
}

/// Testimonials ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
}

impl ReviewBoard {
    /// The testimonials shown before anything has been saved.
    pub fn seeded() -> Self {
        let seed = |id: i64, text: &str, author: &str, company: &str| Review {
            id,
            text: text.to_string(),
            author: author.to_string(),
            company: company.to_string(),
            rating: MAX_RATING,
        };
        Self {
            reviews: vec![
                seed(
                    1,
                    "Juan Carlos demostró ser un desarrollador excepcional. Su atención al detalle y capacidad para entender nuestras necesidades fue impresionante.",
                    "María González",
                    "Tech Solutions",
                ),
                seed(
                    2,
                    "Excelente profesional. Entregó el proyecto antes de tiempo y con una calidad superior a la esperada.",
                    "Carlos Rodríguez",
                    "Digital Innovation",
                ),
                seed(
                    3,
                    "Su conocimiento técnico y habilidad para resolver problemas hicieron que nuestro proyecto fuera un éxito total.",
                    "Ana Martínez",
                    "Creative Studios",
                ),
            ],
        }
    }

    /// Builds the board from whatever local storage held.
    ///
    /// A missing entry means a first visit and gets the seed list; a stored
    /// empty list stays empty.
    pub fn from_stored(stored: Option<Vec<Review>>) -> Self {
        match stored {
            None => Self::seeded(),
            Some(reviews) => Self {
                reviews: reviews
                    .into_iter()
                    .map(|mut r| {
                        r.rating = r.rating.clamp(MIN_RATING, MAX_RATING);
                        r
                    })
                    .collect(),
            },
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == id)
    }

    fn next_id(&self, now_ms: i64) -> Result<i64, ReviewError> {
        match self.reviews.iter().map(|r| r.id).max() {
            Some(max) if max >= now_ms => max.checked_add(1).ok_or(ReviewError::IdsExhausted),
            _ => Ok(now_ms),
        }
    }

    /// Validates and prepends a review. `now_ms` is the wall clock in epoch
    /// milliseconds; ids are bumped past it if two posts land in the same ms.
    pub fn add(&mut self, new: NewReview, now_ms: i64) -> Result<Review, ReviewError> {
        let author = new.author.trim();
        let company = new.company.trim();
        let text = new.text.trim();
        if author.is_empty() {
            return Err(ReviewError::MissingField("nombre"));
        }
        if company.is_empty() {
            return Err(ReviewError::MissingField("empresa"));
        }
        if text.is_empty() {
            return Err(ReviewError::MissingField("comentario"));
        }
        if !(MIN_RATING..=MAX_RATING).contains(&new.rating) {
            return Err(ReviewError::InvalidRating(new.rating));
        }

        let review = Review {
            id: self.next_id(now_ms)?,
            text: text.to_string(),
            author: author.to_string(),
            company: company.to_string(),
            rating: new.rating,
        };
        self.reviews.insert(0, review.clone());
        log::debug!("review {} added by {}", review.id, review.author);
        Ok(review)
    }

    pub fn remove(&mut self, id: i64, session: AdminSession) -> Result<Review, ReviewError> {
        if !session.is_admin() {
            return Err(ReviewError::Unauthorized);
        }
        let pos = self
            .reviews
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReviewError::NotFound(id))?;
        let removed = self.reviews.remove(pos);
        log::debug!("review {} removed", removed.id);
        Ok(removed)
    }

    /// Adds a review, then persists and announces it. A failed email is
    /// logged and the review stays.
    pub fn submit<S: ReviewSink>(
        &mut self,
        new: NewReview,
        now_ms: i64,
        sink: &mut S,
    ) -> Result<Review, ReviewError> {
        let review = self.add(new, now_ms)?;
        sink.persist(&self.reviews);
        if let Err(e) = sink.notify(review_created(&review)) {
            log::error!("Error al enviar notificación de reseña: {e}");
        }
        Ok(review)
    }

    /// Admin delete, then persist and announce. Nothing is written or sent
    /// when the delete is refused.
    pub fn delete<S: ReviewSink>(
        &mut self,
        id: i64,
        session: AdminSession,
        sink: &mut S,
    ) -> Result<Review, ReviewError> {
        let removed = self.remove(id, session)?;
        sink.persist(&self.reviews);
        if let Err(e) = sink.notify(review_deleted(removed.id)) {
            log::error!("Error al enviar notificación de eliminación: {e}");
        }
        Ok(removed)
    }
}
