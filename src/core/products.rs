use crate::domain::model::Product;

/// Highest-priced product; the earliest one wins a tie. `None` for an empty slice.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    let (first, rest) = products.split_first()?;
    let best = rest.iter().fold(first, |best, product| {
        if product.price > best.price {
            product
        } else {
            best
        }
    });
    Some(best)
}
