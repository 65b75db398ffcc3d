//! # Integration Tests
//!
//! Cross-crate scenarios: configuration -> dispatch core -> observability.

#[cfg(test)]
mod contract_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::{IntakeLimits, PatientId};
    use dispatcher::DispatchCore;

    /// An empty config file yields the same core as no config at all
    #[test]
    fn test_empty_config_matches_defaults() {
        let config = ConfigLoader::load_from_str("", ConfigFormat::Toml).unwrap();
        let core = DispatchCore::from_config(&config);

        assert_eq!(core.limits(), &IntakeLimits::default());
        assert_eq!(core.limits().max_age, None);
        assert_eq!(core.next_id(), PatientId::FIRST);
        assert!(core.is_idle());
    }
}

#[cfg(test)]
mod scenario_tests {
    use contracts::{Channel, PatientRecord};
    use dispatcher::DispatchCore;

    fn names<'a>(records: impl Iterator<Item = &'a PatientRecord>) -> Vec<String> {
        records.map(|r| r.name().to_string()).collect()
    }

    /// Regular Alice then emergency Bob: Bob is seen first.
    #[test]
    fn test_emergency_preempts_regular() {
        let mut core = DispatchCore::new();
        assert_eq!(core.register(Channel::Regular, "Alice", 30, "Flu").unwrap(), 1);
        assert_eq!(
            core.register(Channel::Emergency, "Bob", 45, "Trauma").unwrap(),
            2
        );

        assert_eq!(core.consult_next().unwrap().record.name(), "Bob");
        assert_eq!(core.consult_next().unwrap().record.name(), "Alice");
        assert!(core.consult_next().is_none());
    }

    #[test]
    fn test_latest_emergency_first() {
        let mut core = DispatchCore::new();
        assert_eq!(core.register(Channel::Emergency, "A", 1, "x").unwrap(), 1);
        assert_eq!(core.register(Channel::Emergency, "B", 2, "y").unwrap(), 2);

        assert_eq!(core.consult_next().unwrap().record.name(), "B");
        assert_eq!(core.consult_next().unwrap().record.name(), "A");
    }

    #[test]
    fn test_undo_on_fresh_core_is_none() {
        assert!(DispatchCore::new().undo_last().is_none());
    }

    /// Undo reports the registration but leaves the record queued,
    /// and the rewound counter hands out id 1 a second time.
    #[test]
    fn test_undo_is_history_only() {
        let mut core = DispatchCore::new();
        assert_eq!(core.register(Channel::Regular, "Alice", 30, "Flu").unwrap(), 1);

        let entry = core.undo_last().unwrap();
        assert_eq!(entry.id(), 1);
        assert_eq!(entry.channel, Channel::Regular);

        assert_eq!(names(core.list_regular()), vec!["Alice"]);
        assert_eq!(core.register(Channel::Regular, "Zed", 60, "Gout").unwrap(), 1);
        assert_eq!(names(core.list_regular()), vec!["Alice", "Zed"]);
    }

    /// Blank names and any age are well-formed input
    #[test]
    fn test_register_accepts_blank_name_and_old_age() {
        let mut core = DispatchCore::new();
        assert_eq!(core.register(Channel::Regular, "", 30, "x").unwrap(), 1);
        assert_eq!(core.register(Channel::Regular, "Old", 151, "x").unwrap(), 2);
        assert_eq!(core.consult_next().unwrap().record.name(), "");
    }

    #[test]
    fn test_listing_orders() {
        let mut core = DispatchCore::new();
        for name in ["r1", "r2", "r3"] {
            core.register(Channel::Regular, name, 20, "").unwrap();
        }
        for name in ["e1", "e2", "e3"] {
            core.register(Channel::Emergency, name, 20, "").unwrap();
        }

        assert_eq!(names(core.list_regular()), vec!["r1", "r2", "r3"]);
        assert_eq!(names(core.list_emergency()), vec!["e3", "e2", "e1"]);
    }
}

#[cfg(test)]
mod property_tests {
    use contracts::Channel;
    use dispatcher::DispatchCore;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_channel(rng: &mut StdRng) -> Channel {
        if rng.random_bool(0.5) {
            Channel::Regular
        } else {
            Channel::Emergency
        }
    }

    #[test]
    fn test_no_regular_served_while_emergency_waits() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut core = DispatchCore::new();

        for _ in 0..2_000 {
            if rng.random_bool(0.6) {
                core.register(random_channel(&mut rng), "p", 1, "").unwrap();
            } else {
                let emergency_waiting = core.waiting(Channel::Emergency) > 0;
                if let Some(consultation) = core.consult_next() {
                    if emergency_waiting {
                        assert_eq!(consultation.channel, Channel::Emergency);
                    }
                }
            }
        }
    }

    #[test]
    fn test_fifo_among_regulars_under_interleaving() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut core = DispatchCore::new();
        let mut last_regular = 0u64;

        for _ in 0..1_000 {
            if rng.random_bool(0.5) {
                core.register(random_channel(&mut rng), "p", 1, "").unwrap();
            } else if let Some(c) = core.consult_next() {
                if c.channel == Channel::Regular {
                    assert!(c.record.id().get() > last_regular);
                    last_regular = c.record.id().get();
                }
            }
        }
    }

    #[test]
    fn test_stats_match_consultations() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut core = DispatchCore::new();
        let (mut regular, mut emergency) = (0u64, 0u64);

        for _ in 0..1_000 {
            match rng.random_range(0..3) {
                0 => {
                    core.register(random_channel(&mut rng), "p", 1, "").unwrap();
                }
                1 => {
                    core.undo_last();
                }
                _ => match core.consult_next().map(|c| c.channel) {
                    Some(Channel::Regular) => regular += 1,
                    Some(Channel::Emergency) => emergency += 1,
                    None => {}
                },
            }
        }

        let stats = core.stats_snapshot();
        assert_eq!(stats.regular_served, regular);
        assert_eq!(stats.emergency_served, emergency);
        assert_eq!(stats.total_served, regular + emergency);
    }
}

#[cfg(test)]
mod config_tests {
    use config_loader::{ConfigFormat, ConfigLoader};
    use contracts::Channel;
    use dispatcher::{DispatchCore, DispatchError};
    use observability::CensusAggregator;

    const STRICT_DESK: &str = r#"
[desk]
name = "Strict Desk"

[intake]
name_max_chars = 5
overflow = "reject"
"#;

    #[test]
    fn test_config_limits_reach_core() {
        let config = ConfigLoader::load_from_str(STRICT_DESK, ConfigFormat::Toml).unwrap();
        let mut core = DispatchCore::from_config(&config);

        assert!(core.register(Channel::Regular, "Ann", 40, "").is_ok());
        let err = core
            .register(Channel::Regular, "Bartholomew", 40, "")
            .unwrap_err();
        assert!(matches!(err, DispatchError::Intake(_)));
        assert_eq!(core.census().regular_waiting, 1);
    }

    #[test]
    fn test_script_drives_core_and_aggregator() {
        let script = ConfigLoader::load_script_from_str(
            r#"{"steps":[
                {"op":"register","channel":"regular","name":"Alice","age":30,"condition":"Flu"},
                {"op":"register","channel":"emergency","name":"Bob","age":45,"condition":"Trauma"},
                {"op":"consult"}
            ]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        let mut core = DispatchCore::new();
        let mut aggregator = CensusAggregator::new();
        for step in &script.steps {
            if let Some((channel, form)) = step.intake_form() {
                core.register_form(channel, form).unwrap();
            } else {
                core.consult_next();
            }
            aggregator.update(&core.census());
        }

        let summary = aggregator.summary();
        assert_eq!(summary.peak_regular, 1);
        assert_eq!(summary.peak_emergency, 1);
        assert_eq!(summary.stats.emergency_served, 1);
    }
}
