//! Clothing recommendation based on the current temperature

/// Picks a clothing recommendation for a temperature in Fahrenheit
///
/// The intervals are half-open with the boundary belonging to the warmer
/// bucket: exactly 32 reads as chilly rather than cold, 60 as nice, 80 as
/// warm.
pub fn recommend(temp_f: f64) -> &'static str {
    if temp_f < 32.0 {
        "Dress warmly, it's cold outside."
    } else if temp_f < 60.0 {
        "It's a bit chilly, consider wearing a jacket."
    } else if temp_f < 80.0 {
        "The weather is nice, dress comfortably."
    } else {
        "It's warm, don't forget sunscreen!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_freezing_is_cold() {
        assert_eq!(recommend(31.9), "Dress warmly, it's cold outside.");
        assert_eq!(recommend(-10.0), "Dress warmly, it's cold outside.");
    }

    #[test]
    fn test_chilly_range() {
        assert_eq!(
            recommend(45.0),
            "It's a bit chilly, consider wearing a jacket."
        );
        assert_eq!(
            recommend(59.9),
            "It's a bit chilly, consider wearing a jacket."
        );
    }

    #[test]
    fn test_nice_range() {
        assert_eq!(recommend(70.0), "The weather is nice, dress comfortably.");
        assert_eq!(recommend(79.9), "The weather is nice, dress comfortably.");
    }

    #[test]
    fn test_warm_range() {
        assert_eq!(recommend(95.0), "It's warm, don't forget sunscreen!");
    }

    #[test]
    fn test_boundaries_belong_to_warmer_bucket() {
        assert_eq!(
            recommend(32.0),
            "It's a bit chilly, consider wearing a jacket."
        );
        assert_eq!(recommend(60.0), "The weather is nice, dress comfortably.");
        assert_eq!(recommend(80.0), "It's warm, don't forget sunscreen!");
    }
}
