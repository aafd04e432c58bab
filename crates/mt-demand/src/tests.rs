//! Unit tests for mt-demand.

use mt_core::{Bounds, PipelineConfig, SimRng};
use mt_network::{RoadNetwork, load_network_str};

use crate::ArrivalProcess;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One road `R1`, 500 m, six shape points.
const ONE_ROAD: &str = r#"<net>
    <edge id="R1" from="J1" to="J2" length="500">
        <lane id="R1_0" shape="0,0 100,0 200,0 300,0 400,0 500,0"/>
    </edge>
</net>"#;

/// `R1` plus its opposite direction `-R1`.
const TWO_WAY: &str = r#"<net>
    <edge id="R1" from="J1" to="J2" length="500">
        <lane id="R1_0" shape="0,0 500,0"/>
    </edge>
    <edge id="-R1" from="J2" to="J1" length="500">
        <lane id="-R1_0" shape="500,0 0,0"/>
    </edge>
</net>"#;

fn network(doc: &str) -> RoadNetwork {
    load_network_str(doc, &PipelineConfig::default()).unwrap()
}

fn process(config: &PipelineConfig) -> ArrivalProcess {
    ArrivalProcess::from_config(config).unwrap()
}

/// Default rate and horizon, jitter pinned to exactly 1.0.
fn unjittered() -> PipelineConfig {
    PipelineConfig { arrival_jitter: Bounds::new(1.0, 1.0), ..Default::default() }
}

// ── Arrival process ───────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival {
    use mt_core::VehicleId;
    use mt_network::{NetworkError, RoadSelector};

    use crate::{DemandError, Direction};

    use super::*;

    #[test]
    fn departures_within_horizon() {
        let cfg = PipelineConfig::default();
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(1);
        let events = process(&cfg)
            .generate_for(&net, &RoadSelector::Longest, &mut rng)
            .unwrap();
        assert!(!events.is_empty());
        for e in &events {
            assert!(e.depart_secs >= 0.0 && e.depart_secs < cfg.horizon_secs, "{e:?}");
        }
        assert_eq!(events[0].depart_secs, 0.0);
        assert_eq!(events[0].direction, Direction::Forward);
    }

    #[test]
    fn forward_spacing_follows_jitter_law() {
        let cfg = PipelineConfig::default();
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(7);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);

        let forward: Vec<f64> = events
            .iter()
            .filter(|e| e.direction == Direction::Forward)
            .map(|e| e.depart_secs)
            .collect();
        let base = cfg.base_interval_secs();
        for pair in forward.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap >= base * 0.7 - 1e-9 && gap < base * 1.3 + 1e-9, "gap {gap}");
        }
    }

    #[test]
    fn unjittered_count_is_horizon_over_interval() {
        let cfg = unjittered();
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(3);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        let forward = events.iter().filter(|e| e.direction == Direction::Forward).count() as i64;
        let expected = (cfg.horizon_secs / cfg.base_interval_secs()).floor() as i64;
        assert!((forward - expected).abs() <= 1, "forward {forward}, expected {expected}");
    }

    #[test]
    fn large_horizon_count() {
        let cfg = PipelineConfig {
            horizon_secs: 360_000.0,
            rate_per_hour: 250.0,
            ..unjittered()
        };
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(3);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        let forward = events.iter().filter(|e| e.direction == Direction::Forward).count() as i64;
        assert!((forward - 25_000).abs() <= 1, "forward {forward}");
    }

    #[test]
    fn reverse_shares_forward_time_and_toggles_id() {
        let cfg = PipelineConfig { reverse_probability: 1.0, ..Default::default() };
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(11);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        assert_eq!(events.len() % 2, 0);
        for pair in events.chunks(2) {
            assert_eq!(pair[0].edge, "R1");
            assert_eq!(pair[1].edge, "-R1");
            assert_eq!(pair[1].direction, Direction::Reverse);
            assert_eq!(pair[0].depart_secs, pair[1].depart_secs);
        }
    }

    #[test]
    fn no_reverse_when_probability_zero() {
        let cfg = PipelineConfig { reverse_probability: 0.0, ..Default::default() };
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(5);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        assert!(events.iter().all(|e| e.direction == Direction::Forward));
    }

    #[test]
    fn reverse_fraction_near_probability() {
        let cfg = PipelineConfig { horizon_secs: 360_000.0, ..Default::default() };
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(99);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        let forward = events.iter().filter(|e| e.direction == Direction::Forward).count() as f64;
        let reverse = events.iter().filter(|e| e.direction == Direction::Reverse).count() as f64;
        let ratio = reverse / forward;
        assert!((0.07..0.13).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn ids_sequential_across_directions() {
        let cfg = PipelineConfig { reverse_probability: 0.5, ..Default::default() };
        let net = network(ONE_ROAD);
        let mut rng = SimRng::new(21);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut rng);
        for (i, e) in events.iter().enumerate() {
            assert_eq!(e.vehicle, VehicleId(i as u32));
        }
        // Emission order is non-decreasing in time.
        assert!(events.windows(2).all(|w| w[0].depart_secs <= w[1].depart_secs));
    }

    #[test]
    fn same_seed_same_schedule() {
        let cfg = PipelineConfig::default();
        let net = network(ONE_ROAD);
        let road = net.get("R1").unwrap();
        let a = process(&cfg).generate(road, &mut SimRng::new(8));
        let b = process(&cfg).generate(road, &mut SimRng::new(8));
        assert_eq!(a, b);
    }

    #[test]
    fn reverse_requires_road_drops_dangling_ids() {
        let cfg = PipelineConfig {
            reverse_probability:   1.0,
            reverse_requires_road: true,
            ..Default::default()
        };
        let net = network(ONE_ROAD);
        let events = process(&cfg)
            .generate_for(&net, &RoadSelector::Longest, &mut SimRng::new(2))
            .unwrap();
        assert!(events.iter().all(|e| net.contains(&e.edge)));
        assert!(events.iter().all(|e| e.direction == Direction::Forward));
    }

    #[test]
    fn reverse_requires_road_keeps_existing_reverse() {
        let cfg = PipelineConfig {
            reverse_probability:   1.0,
            reverse_requires_road: true,
            ..Default::default()
        };
        let net = network(TWO_WAY);
        let events = process(&cfg)
            .generate_for(&net, &RoadSelector::ById("R1".into()), &mut SimRng::new(2))
            .unwrap();
        assert!(events.iter().any(|e| e.edge == "-R1"));
        assert!(events.iter().all(|e| net.contains(&e.edge)));
    }

    #[test]
    fn forward_schedule_independent_of_reverse_filter() {
        let base = PipelineConfig { reverse_probability: 0.5, ..Default::default() };
        let strict = PipelineConfig { reverse_requires_road: true, ..base.clone() };
        let net = network(ONE_ROAD);
        let times = |cfg: &PipelineConfig| -> Vec<f64> {
            process(cfg)
                .generate_for(&net, &RoadSelector::Longest, &mut SimRng::new(4))
                .unwrap()
                .into_iter()
                .filter(|e| e.direction == Direction::Forward)
                .map(|e| e.depart_secs)
                .collect()
        };
        assert_eq!(times(&base), times(&strict));
    }

    #[test]
    fn missing_target_is_reported() {
        let net = network(ONE_ROAD);
        let result = process(&PipelineConfig::default()).generate_for(
            &net,
            &RoadSelector::ById("nope".into()),
            &mut SimRng::new(0),
        );
        match result {
            Err(DemandError::Network(NetworkError::TargetNotFound { suggestions, .. })) => {
                assert_eq!(suggestions, ["R1"]);
            }
            other => panic!("expected TargetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = PipelineConfig { rate_per_hour: 0.0, ..Default::default() };
        assert!(matches!(ArrivalProcess::from_config(&cfg), Err(DemandError::Config(_))));
    }

    #[test]
    fn unbounded_rate_rejected_before_generation() {
        let cfg = PipelineConfig { rate_per_hour: 1e30, ..Default::default() };
        assert!(matches!(ArrivalProcess::from_config(&cfg), Err(DemandError::Config(_))));
    }

    #[test]
    fn high_rate_generates_past_preallocation() {
        // 1.2M expected departures, above the up-front reservation.
        let cfg = PipelineConfig {
            rate_per_hour: 1.2e6,
            reverse_probability: 0.0,
            ..unjittered()
        };
        let net = network(ONE_ROAD);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut SimRng::new(3));
        assert!(events.len().abs_diff(1_200_000) <= 1, "{}", events.len());
    }

    #[test]
    fn end_to_end_scenario_counts() {
        let cfg = PipelineConfig::default();
        let net = network(ONE_ROAD);
        let events = process(&cfg)
            .generate_for(&net, &RoadSelector::Longest, &mut SimRng::new(2024))
            .unwrap();
        let forward = events.iter().filter(|e| e.direction == Direction::Forward).count();
        // Mean gap 36 s, bounded to [25.2, 46.8): between 77 and 143 departures.
        assert!((77..=143).contains(&forward), "forward {forward}");
        assert!(events.iter().filter(|e| e.direction == Direction::Reverse).all(|e| e.edge == "-R1"));
    }
}

// ── Route file ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use mt_core::VehicleId;

    use crate::{
        DemandError, DepartureEvent, Direction, RouteRecord, VehicleType, load_routes_file,
        load_routes_str, render_routes, write_routes_file,
    };

    use super::*;

    fn event(id: u32, edge: &str, t: f64) -> DepartureEvent {
        DepartureEvent {
            vehicle:     VehicleId(id),
            edge:        edge.to_owned(),
            direction:   if edge.starts_with('-') { Direction::Reverse } else { Direction::Forward },
            depart_secs: t,
        }
    }

    #[test]
    fn render_contains_vtype_and_vehicles() {
        let xml = render_routes(&[event(0, "R1", 0.0), event(1, "-R1", 36.456)], &VehicleType::default()).unwrap();
        assert!(xml.contains(r#"<vType id="manet_vehicle" accel="2.0" decel="4.0" sigma="0.3""#));
        assert!(xml.contains(r#"maxSpeed="13.89" speedFactor="0.9""#));
        assert!(xml.contains(r#"<vehicle id="vehicle_0000" type="manet_vehicle" depart="0.00">"#));
        assert!(xml.contains(r#"<vehicle id="vehicle_0001" type="manet_vehicle" depart="36.45">"#));
        assert!(xml.contains(r#"<route edges="-R1"/>"#));
        assert!(xml.trim_end().ends_with("</routes>"));
    }

    #[test]
    fn rendered_document_reads_back() {
        let events = [event(0, "R1", 0.0), event(1, "-R1", 12.346), event(2, "R1", 40.0)];
        let xml = render_routes(&events, &VehicleType::default()).unwrap();
        let records = load_routes_str(&xml).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].vehicle_id, "vehicle_0001");
        assert_eq!(records[1].edges, ["-R1"]);
        // Truncated to two decimals.
        assert_eq!(records[1].depart_secs, 12.34);
    }

    #[test]
    fn special_characters_escaped() {
        let xml = render_routes(&[event(0, "a&b\"c", 0.0)], &VehicleType::default()).unwrap();
        let records = load_routes_str(&xml).unwrap();
        assert_eq!(records[0].edges, ["a&b\"c"]);
    }

    #[test]
    fn reader_skips_incomplete_vehicles() {
        let doc = r#"<routes>
            <vehicle depart="1"><route edges="A"/></vehicle>
            <vehicle id="no_depart"><route edges="A"/></vehicle>
            <vehicle id="bad_depart" depart="soon"><route edges="A"/></vehicle>
            <vehicle id="no_route" depart="2"/>
            <vehicle id="empty_route" depart="3"><route edges="  "/></vehicle>
            <vehicle id="ok" depart="4.5"><route edges="A B  C"/></vehicle>
        </routes>"#;
        let records = load_routes_str(doc).unwrap();
        assert_eq!(
            records,
            vec![RouteRecord {
                vehicle_id:  "ok".into(),
                depart_secs: 4.5,
                edges:       vec!["A".into(), "B".into(), "C".into()],
            }]
        );
    }

    #[test]
    fn reader_errors() {
        assert!(matches!(load_routes_str("<routes>"), Err(DemandError::Unreadable(_))));
        assert!(matches!(load_routes_str("<routes/>"), Err(DemandError::NoVehicles)));
    }

    #[test]
    fn write_refuses_empty_and_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.rou.xml");
        let result = write_routes_file(&path, &[], &VehicleType::default());
        assert!(matches!(result, Err(DemandError::NoVehicles)));
        assert!(!path.exists());
    }

    #[test]
    fn write_refuses_empty_without_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.rou.xml");
        std::fs::write(&path, "previous run").unwrap();
        assert!(write_routes_file(&path, &[], &VehicleType::default()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run");
    }

    #[test]
    fn departure_just_below_horizon_reads_back_below_it() {
        let cfg = PipelineConfig {
            rate_per_hour: 3_600.0 / 3_599.996,
            reverse_probability: 0.0,
            ..unjittered()
        };
        let net = network(ONE_ROAD);
        let events = process(&cfg).generate(net.get("R1").unwrap(), &mut SimRng::new(0));
        assert_eq!(events.len(), 2);
        assert!(events[1].depart_secs > 3_599.99);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.rou.xml");
        write_routes_file(&path, &events, &VehicleType::default()).unwrap();
        let records = load_routes_file(&path).unwrap();

        assert_eq!(records[1].depart_secs, 3_599.99);
        assert!(records.iter().all(|r| (0.0..cfg.horizon_secs).contains(&r.depart_secs)));
    }

    #[test]
    fn file_round_trip_references_network_roads() {
        let net = network(TWO_WAY);
        let events = process(&PipelineConfig::default()).generate(net.get("R1").unwrap(), &mut SimRng::new(13));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.rou.xml");
        write_routes_file(&path, &events, &VehicleType::default()).unwrap();
        let records = load_routes_file(&path).unwrap();

        assert_eq!(records.len(), events.len());
        for r in &records {
            assert!(r.edges.iter().all(|e| net.contains(e)), "{r:?}");
        }
    }
}
