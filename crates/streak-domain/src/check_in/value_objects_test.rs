#[cfg(test)]
mod tests {
    use super::super::value_objects::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(StreakTier::for_streak(0), None);
        assert_eq!(StreakTier::for_streak(1), Some(StreakTier::Start));
        assert_eq!(StreakTier::for_streak(2), Some(StreakTier::Building));
        assert_eq!(StreakTier::for_streak(6), Some(StreakTier::Building));
        assert_eq!(StreakTier::for_streak(7), Some(StreakTier::Strong));
        assert_eq!(StreakTier::for_streak(29), Some(StreakTier::Strong));
        assert_eq!(StreakTier::for_streak(30), Some(StreakTier::Excellent));
        assert_eq!(StreakTier::for_streak(99), Some(StreakTier::Excellent));
        assert_eq!(StreakTier::for_streak(100), Some(StreakTier::Legendary));
        assert_eq!(StreakTier::for_streak(5000), Some(StreakTier::Legendary));
    }

    #[test]
    fn test_tier_messages_mention_streak_length() {
        assert!(StreakTier::Start.message(1).starts_with("Great start!"));
        assert!(StreakTier::Building.message(4).contains("4-day streak"));
        assert!(StreakTier::Strong.message(12).contains("12 days strong"));
        assert!(StreakTier::Excellent.message(45).contains("45-day streak"));
        assert!(StreakTier::Legendary.message(150).starts_with("LEGENDARY! 150 days!"));
    }

    #[test]
    fn test_tier_names() {
        assert_eq!(StreakTier::Start.as_str(), "start");
        assert_eq!(StreakTier::Legendary.as_str(), "legendary");
        assert_eq!(
            serde_json::to_string(&StreakTier::Excellent).unwrap(),
            "\"excellent\""
        );
    }

    #[test]
    fn test_is_new_record() {
        let mut stats = StreakStats {
            current_streak: 1,
            longest_streak: 1,
            last_check_in_date: None,
            total_check_ins: 1,
        };
        assert!(!stats.is_new_record()); // single day never counts

        stats.current_streak = 3;
        stats.longest_streak = 3;
        assert!(stats.is_new_record());

        stats.longest_streak = 5;
        assert!(!stats.is_new_record());
    }
}
