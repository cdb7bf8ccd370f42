use crate::domain::model::RatedItem;

pub const MIN_RATING: f64 = 4.0;

/// Items rated at least [`MIN_RATING`], in their original order.
pub fn filter_by_rating(items: &[RatedItem]) -> Vec<RatedItem> {
    filter_by_min_rating(items, MIN_RATING)
}

pub fn filter_by_min_rating(items: &[RatedItem], min_rating: f64) -> Vec<RatedItem> {
    let kept: Vec<RatedItem> = items
        .iter()
        .filter(|item| item.rating >= min_rating)
        .cloned()
        .collect();

    tracing::debug!(
        "Rating filter kept {} of {} items (min {})",
        kept.len(),
        items.len(),
        min_rating
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RatedItem> {
        vec![
            RatedItem::new("Inception", 4.8),
            RatedItem::new("Cats", 2.1),
            RatedItem::new("Heat", 4.0),
            RatedItem::new("Jaws", 3.99),
            RatedItem::new("Alien", 5.0),
        ]
    }

    #[test]
    fn test_filter_by_rating_keeps_order_and_boundary() {
        let items = sample();
        let titles: Vec<String> = filter_by_rating(&items)
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, vec!["Inception", "Heat", "Alien"]);
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_filter_by_rating_empty() {
        assert!(filter_by_rating(&[]).is_empty());
    }

    #[test]
    fn test_filter_by_min_rating_custom_threshold() {
        let kept = filter_by_min_rating(&sample(), 4.9);
        assert_eq!(kept, vec![RatedItem::new("Alien", 5.0)]);
    }
}
