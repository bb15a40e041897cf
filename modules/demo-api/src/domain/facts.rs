//! Fixed catalog of devops facts.
//!
//! `GET /api/devops-fact` draws uniformly from this set with replacement;
//! consecutive calls may repeat and no draw is tracked across requests.

use rand::Rng as _;

/// Attribution reported alongside every fact.
pub const FACT_SOURCE: &str = "embedded catalog";

pub const FACTS: &[&str] = &[
    "CI stands for Continuous Integration: merge small changes often and let automation test every one.",
    "CD can mean Continuous Delivery (ready to release) or Continuous Deployment (released automatically).",
    "The term DevOps was popularized by the first DevOpsDays conference in Ghent, Belgium, in 2009.",
    "Blue-green deployments keep two production environments so a release is a traffic switch, not an outage.",
    "A canary release sends a small slice of traffic to the new version before rolling it out everywhere.",
    "Infrastructure as Code treats servers and networks as versioned text, reviewable like any other change.",
    "The four DORA metrics are deployment frequency, lead time, change failure rate, and time to restore.",
    "Containers package an application with its dependencies so it runs the same on a laptop and in production.",
    "Trunk-based development keeps branches short-lived so integration pain never has time to accumulate.",
    "A pipeline that fails fast is a feature: the cheapest bug is the one caught before review.",
];

/// Pick one fact uniformly at random.
pub fn random_fact() -> &'static str {
    let mut rng = rand::rng();
    FACTS[rng.random_range(0..FACTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_non_empty_and_distinct() {
        assert!(!FACTS.is_empty());
        let unique: HashSet<&str> = FACTS.iter().copied().collect();
        assert_eq!(unique.len(), FACTS.len());
    }

    #[test]
    fn draws_stay_inside_the_catalog() {
        for _ in 0..200 {
            assert!(FACTS.contains(&random_fact()));
        }
    }

    #[test]
    fn every_fact_is_eventually_drawn() {
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.insert(random_fact());
            if seen.len() == FACTS.len() {
                break;
            }
        }
        assert_eq!(seen.len(), FACTS.len(), "uniform draw should cover the catalog");
    }
}
