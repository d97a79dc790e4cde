//! Review input and rating bounds

use super::validation::{require_text, ValidationError};

/// Lowest accepted star rating
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating
pub const MAX_RATING: i32 = 5;

/// Star rating in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match i32::try_from(value) {
            Ok(v) if (MIN_RATING..=MAX_RATING).contains(&v) => Ok(Self(v)),
            _ => Err(ValidationError::OutOfRange {
                field: "rating",
                min: MIN_RATING.into(),
                max: MAX_RATING.into(),
            }),
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Validated review.
///
/// `user_id` and `space_id` are not looked up here; the foreign keys on
/// `reviews` reject dangling references at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title: String,
    pub description: String,
    pub rating: Rating,
    pub user_id: i64,
    pub space_id: i64,
}

impl NewReview {
    pub fn new(
        title: String,
        description: String,
        rating: i64,
        user_id: i64,
        space_id: i64,
    ) -> Result<Self, ValidationError> {
        require_text("title", &title)?;
        let rating = Rating::new(rating)?;
        Ok(Self {
            title,
            description,
            rating,
            user_id,
            space_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert_eq!(Rating::new(1).unwrap().get(), 1);
        assert_eq!(Rating::new(5).unwrap().get(), 5);
        assert!(matches!(
            Rating::new(0),
            Err(ValidationError::OutOfRange { min: 1, max: 5, .. })
        ));
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(i64::MAX).is_err());
        assert!(Rating::new(-3).is_err());
    }

    #[test]
    fn review_requires_title() {
        let err = NewReview::new(" ".into(), "nice".into(), 4, 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "title" });
    }

    #[test]
    fn review_checks_rating_after_title() {
        let err = NewReview::new("Great".into(), "".into(), 9, 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "rating", .. }));
    }

    #[test]
    fn valid_review() {
        let review = NewReview::new("Great".into(), "Good coffee".into(), 4, 7, 3).unwrap();
        assert_eq!(review.rating.get(), 4);
        assert_eq!((review.user_id, review.space_id), (7, 3));
    }
}
