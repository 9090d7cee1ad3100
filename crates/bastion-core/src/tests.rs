#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::profile::PlayerProfile;
    use crate::stats::derive_stats;
    use crate::types::{Position, SimTime};
    use crate::upgrades::{initial_upgrades, UpgradeId};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Standard,
            EnemyKind::Speedster,
            EnemyKind::Tank,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_game_speed_factors() {
        assert_eq!(GameSpeed::Normal.factor(), 1.0);
        assert_eq!(GameSpeed::Faster.factor(), 1.5);
        assert_eq!(GameSpeed::Double.factor(), 2.0);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Purchase {
                upgrade: UpgradeId::Damage,
            },
            PlayerCommand::TriggerAbility,
            PlayerCommand::SetSpeed {
                speed: GameSpeed::Double,
            },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::StartRun,
            PlayerCommand::ReturnToMenu,
            PlayerCommand::ResetRun,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyHit {
                unit_id: 7,
                damage: 12.5,
                crit: true,
            },
            GameEvent::WaveCompleted {
                wave: 10,
                cash: 1100.0,
                score: 5000.0,
                gems: 6,
            },
            GameEvent::CommandRejected {
                reason: RejectReason::InsufficientCash,
            },
            GameEvent::GameOver {
                wave: 4,
                score: 321.0,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Upgrade ids serialize to their stable save-record keys.
    #[test]
    fn test_upgrade_id_stable_keys() {
        assert_eq!(serde_json::to_string(&UpgradeId::Damage).unwrap(), "\"dmg\"");
        assert_eq!(
            serde_json::to_string(&UpgradeId::AttackSpeed).unwrap(),
            "\"atk_spd\""
        );
        assert_eq!(
            serde_json::to_string(&UpgradeId::EmpCooldown).unwrap(),
            "\"emp_cdr\""
        );
    }

    // ---- Geometry / time ----

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_sq_to(&b) - 25.0).abs() < 1e-10);
        assert!((b.distance_from_center() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_step_toward_zero_distance_is_noop() {
        let mut p = Position::new(1.0, 2.0);
        let target = p;
        p.step_toward(&target, 10.0);
        assert_eq!(p, Position::new(1.0, 2.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Upgrade curves ----

    #[test]
    fn test_initial_table_covers_every_axis() {
        let upgrades = initial_upgrades();
        let ids: Vec<UpgradeId> = upgrades.iter().map(|u| u.id).collect();
        assert_eq!(ids, UpgradeId::ALL, "one entry per axis, in display order");
    }

    #[test]
    fn test_cost_curve() {
        let upgrades = initial_upgrades();
        let dmg = upgrades.iter().find(|u| u.id == UpgradeId::Damage).unwrap();
        // floor(10 * 1.4^1) = 14 at level 1
        assert_eq!(dmg.next_cost(), 14.0);

        let mut later = dmg.clone();
        later.level = 5;
        // floor(10 * 1.4^5) = floor(53.78) = 53
        assert_eq!(later.next_cost(), 53.0);
    }

    #[test]
    fn test_cost_monotonically_increases() {
        for upgrade in initial_upgrades() {
            let mut u = upgrade.clone();
            let mut prev = u.next_cost();
            for level in 1..20 {
                u.level = level;
                let cost = u.next_cost();
                assert!(
                    cost > prev,
                    "{:?}: cost at level {} ({}) should exceed previous ({})",
                    u.id,
                    level,
                    cost,
                    prev
                );
                prev = cost;
            }
        }
    }

    #[test]
    fn test_locked_axis_contributes_zero() {
        let upgrades = initial_upgrades();
        let dodge = upgrades.iter().find(|u| u.id == UpgradeId::Dodge).unwrap();
        assert_eq!(dodge.level, 0);
        assert_eq!(dodge.effective_value(), 0.0);
    }

    #[test]
    fn test_value_clamped_to_design_limits() {
        let upgrades = initial_upgrades();
        let mut dodge = upgrades.iter().find(|u| u.id == UpgradeId::Dodge).unwrap().clone();
        // 5 + 0.5 * (level - 1) would pass 90 at level 172.
        dodge.level = 500;
        assert_eq!(dodge.effective_value(), 90.0);

        let mut range = upgrades.iter().find(|u| u.id == UpgradeId::Range).unwrap().clone();
        range.level = 1000;
        assert_eq!(range.effective_value(), 450.0);
    }

    // ---- Stats derivation ----

    #[test]
    fn test_default_stats() {
        let stats = derive_stats(&initial_upgrades(), None);
        assert_eq!(stats.damage, 5.0);
        assert_eq!(stats.attack_speed, 1.0);
        assert_eq!(stats.range, 150.0);
        assert_eq!(stats.crit_chance, 0.0);
        assert_eq!(stats.crit_factor, 1.0);
        assert_eq!(stats.projectile_count, 3);
        assert_eq!(stats.max_health, 100.0);
        assert_eq!(stats.health, 100.0);
        assert_eq!(stats.max_shield, 0.0);
        assert!((stats.regen - BASE_REGEN_PER_SEC).abs() < 1e-10);
        assert_eq!(stats.emp_damage, 50.0);
        assert_eq!(stats.emp_cooldown, 30.0);
    }

    #[test]
    fn test_stats_idempotent() {
        let upgrades = initial_upgrades();
        let a = derive_stats(&upgrades, None);
        let b = derive_stats(&upgrades, None);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_stats_carry_forward_clamps_to_max() {
        let upgrades = initial_upgrades();
        let stats = derive_stats(&upgrades, Some((250.0, 50.0)));
        assert_eq!(stats.health, 100.0, "carried hp clamps to new max");
        assert_eq!(stats.shield, 0.0, "carried shield clamps to zero max");

        let stats = derive_stats(&upgrades, Some((42.0, 0.0)));
        assert_eq!(stats.health, 42.0, "carried hp below max is preserved");
    }

    #[test]
    fn test_stats_floors() {
        // An empty upgrade list falls back to defaults and floors.
        let stats = derive_stats(&[], None);
        assert!(stats.max_health >= MIN_MAX_HEALTH);
        assert!(stats.emp_cooldown >= MIN_EMP_COOLDOWN_SECS);
        assert_eq!(stats.projectile_count, BASE_PROJECTILE_COUNT);
    }

    #[test]
    fn test_emp_cooldown_floor_under_heavy_upgrades() {
        let mut upgrades = initial_upgrades();
        let cdr = upgrades
            .iter_mut()
            .find(|u| u.id == UpgradeId::EmpCooldown)
            .unwrap();
        // 30 - 2 per level reaches the axis floor of 1; the derived stat
        // still floors at 5 seconds.
        cdr.level = 40;
        let stats = derive_stats(&upgrades, None);
        assert_eq!(stats.emp_cooldown, MIN_EMP_COOLDOWN_SECS);
    }

    #[test]
    fn test_multi_shot_projectile_count() {
        let mut upgrades = initial_upgrades();
        let ms = upgrades
            .iter_mut()
            .find(|u| u.id == UpgradeId::MultiShot)
            .unwrap();
        ms.level = 1;
        let stats = derive_stats(&upgrades, None);
        // Base 3 plus the axis value at level 1 (3).
        assert_eq!(stats.projectile_count, 6);
    }

    // ---- Profile fallback ----

    #[test]
    fn test_profile_from_empty_json() {
        let profile = PlayerProfile::from_json(&serde_json::json!({}));
        assert_eq!(profile.cash, STARTING_CASH);
        assert_eq!(profile.gems, 0);
        assert_eq!(profile.wave, 1);
        assert_eq!(profile.upgrades.len(), 14);
    }

    #[test]
    fn test_profile_field_by_field_fallback() {
        // cash is malformed, gems is valid: only cash falls back.
        let profile = PlayerProfile::from_json(&serde_json::json!({
            "cash": "not a number",
            "gems": 12,
            "wave": 0,
        }));
        assert_eq!(profile.cash, STARTING_CASH);
        assert_eq!(profile.gems, 12);
        assert_eq!(profile.wave, 1, "wave floors at 1");
    }

    #[test]
    fn test_profile_upgrade_sanitization() {
        // A save with a tampered cost curve and a missing axis: levels are
        // kept, curve parameters are restored, the missing axis is
        // back-filled.
        let mut saved = initial_upgrades();
        saved.retain(|u| u.id != UpgradeId::Dodge);
        let idx = saved.iter().position(|u| u.id == UpgradeId::Damage).unwrap();
        saved[idx].level = 7;
        saved[idx].base_cost = 1.0;

        let profile = PlayerProfile::from_json(&serde_json::json!({
            "upgrades": saved,
        }));
        assert_eq!(profile.upgrades.len(), 14);
        let dmg = profile
            .upgrades
            .iter()
            .find(|u| u.id == UpgradeId::Damage)
            .unwrap();
        assert_eq!(dmg.level, 7);
        assert_eq!(dmg.base_cost, 10.0, "curve comes from the canonical table");
        assert!(profile.upgrades.iter().any(|u| u.id == UpgradeId::Dodge));
    }

    #[test]
    fn test_profile_negative_cash_clamped() {
        let profile = PlayerProfile::from_json(&serde_json::json!({ "cash": -50.0 }));
        assert_eq!(profile.cash, 0.0);
    }
}
