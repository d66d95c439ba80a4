//! Unit tests for nb-source.

use std::io::Cursor;

use nb_core::Point;

use crate::{
    ArgsSource, PositionSource, PositionSourceExt, PromptSource, ScatterSource, SourceError,
    load_positions_reader, parse_point,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 20.0),
        Point::new(20.0, 20.0),
        Point::new(20.0, 0.0),
    ]
}

fn prompt(input: &str, defaults: Vec<Point>) -> PromptSource<Cursor<Vec<u8>>, Vec<u8>> {
    PromptSource::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), defaults)
}

// ── parse_point ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use super::*;

    #[test]
    fn accepts_two_numbers() {
        assert_eq!(parse_point("10.0 15.0").unwrap(), Point::new(10.0, 15.0));
        assert_eq!(parse_point("  -3   4e1 ").unwrap(), Point::new(-3.0, 40.0));
        assert_eq!(parse_point("7\t8").unwrap(), Point::new(7.0, 8.0));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert!(matches!(
            parse_point("10.0"),
            Err(SourceError::WrongTokenCount { got: 1, .. })
        ));
        assert!(matches!(
            parse_point("1 2 3"),
            Err(SourceError::WrongTokenCount { got: 3, .. })
        ));
        assert!(matches!(
            parse_point(""),
            Err(SourceError::WrongTokenCount { got: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric() {
        match parse_point("ten 15") {
            Err(SourceError::NotANumber { token }) => assert_eq!(token, "ten"),
            other => panic!("unexpected {other:?}"),
        }
        // Comma-separated is a single token, not two numbers.
        assert!(parse_point("10,15").is_err());
    }

    #[test]
    fn rejects_non_finite() {
        for input in ["NaN 0", "0 inf", "-inf 1", "1e400 0"] {
            assert!(
                matches!(parse_point(input), Err(SourceError::NonFinite { .. })),
                "{input:?} should be rejected"
            );
        }
    }
}

// ── PromptSource ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod prompt_source {
    use super::*;

    #[test]
    fn empty_lines_accept_defaults() {
        let mut src = prompt("\n\n\n\n", square());
        assert_eq!(src.acquire().unwrap(), square());
    }

    #[test]
    fn typed_entries_override_defaults() {
        let mut src = prompt("1 2\n\n5.5 -6\n\n", square());
        let got = src.acquire().unwrap();
        assert_eq!(got[0], Point::new(1.0, 2.0));
        assert_eq!(got[1], Point::new(0.0, 20.0));
        assert_eq!(got[2], Point::new(5.5, -6.0));
        assert_eq!(got[3], Point::new(20.0, 0.0));
    }

    #[test]
    fn malformed_entry_is_asked_again() {
        let mut src = prompt("oops 1\noops\n4 4\n", vec![Point::ZERO]).title("Enter positions");
        assert_eq!(src.acquire().unwrap(), vec![Point::new(4.0, 4.0)]);

        let printed = String::from_utf8(src.into_output()).unwrap();
        assert!(printed.starts_with("Enter positions\n"));
        assert_eq!(printed.matches("Bug 1 (x y) [0 0]: ").count(), 3);
        assert_eq!(printed.matches("Input error:").count(), 2);
        assert!(printed.contains("\"oops\" is not a number"));
        assert!(printed.contains("expected \"x y\", got 1 value(s) in \"oops\""));
    }

    #[test]
    fn end_of_input_cancels() {
        let mut src = prompt("1 1\n", square());
        assert!(matches!(src.acquire(), Err(SourceError::Cancelled)));
    }

    #[test]
    fn agent_count_follows_defaults() {
        let src = prompt("", square());
        assert_eq!(src.agent_count(), 4);
    }
}

// ── ArgsSource ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod args_source {
    use super::*;

    #[test]
    fn parses_each_entry() {
        let mut src = ArgsSource::new(["0 0", "0 20", "20 20", "20 0"], 4);
        assert_eq!(src.acquire().unwrap(), square());
    }

    #[test]
    fn wrong_entry_count_errors() {
        let mut src = ArgsSource::new(["0 0", "0 20"], 4);
        assert!(matches!(
            src.acquire(),
            Err(SourceError::CountMismatch { expected: 4, got: 2 })
        ));
    }

    #[test]
    fn malformed_entry_errors() {
        let mut src = ArgsSource::new(["0 0", "x y"], 2);
        assert!(matches!(src.acquire(), Err(SourceError::NotANumber { .. })));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    const SQUARE_CSV: &str = "\
agent_id,x,y
0,0.0,0.0
1,0.0,20.0
2,20.0,20.0
3,20.0,0.0
";

    #[test]
    fn loads_square() {
        let positions = load_positions_reader(Cursor::new(SQUARE_CSV), 4).unwrap();
        assert_eq!(positions, square());
    }

    #[test]
    fn rows_may_be_out_of_order() {
        let csv = "agent_id,x,y\n2, 20, 20\n0, 0, 0\n3, 20, 0\n1, 0, 20\n";
        let positions = load_positions_reader(Cursor::new(csv), 4).unwrap();
        assert_eq!(positions, square());
    }

    #[test]
    fn missing_agent_errors() {
        let csv = "agent_id,x,y\n0,0,0\n1,0,20\n3,20,0\n";
        assert!(matches!(
            load_positions_reader(Cursor::new(csv), 4),
            Err(SourceError::MissingAgent { agent: 2 })
        ));
    }

    #[test]
    fn duplicate_agent_errors() {
        let csv = "agent_id,x,y\n0,0,0\n0,1,1\n";
        assert!(matches!(
            load_positions_reader(Cursor::new(csv), 2),
            Err(SourceError::DuplicateAgent { agent: 0 })
        ));
    }

    #[test]
    fn out_of_range_agent_errors() {
        let csv = "agent_id,x,y\n0,0,0\n7,1,1\n";
        assert!(matches!(
            load_positions_reader(Cursor::new(csv), 2),
            Err(SourceError::UnknownAgent { agent: 7, expected: 2 })
        ));
    }

    #[test]
    fn non_numeric_field_errors() {
        let csv = "agent_id,x,y\n0,zero,0\n";
        assert!(matches!(
            load_positions_reader(Cursor::new(csv), 1),
            Err(SourceError::Csv(_))
        ));
    }

    #[test]
    fn non_finite_field_errors() {
        let csv = "agent_id,x,y\n0,NaN,0\n";
        assert!(matches!(
            load_positions_reader(Cursor::new(csv), 1),
            Err(SourceError::NonFinite { .. })
        ));
    }
}

// ── ScatterSource ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scatter {
    use super::*;

    #[test]
    fn same_seed_same_formation() {
        let a = ScatterSource::new(6, 42, 10.0).acquire().unwrap();
        let b = ScatterSource::new(6, 42, 10.0).acquire().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn different_seeds_differ() {
        let a = ScatterSource::new(4, 1, 10.0).acquire().unwrap();
        let b = ScatterSource::new(4, 2, 10.0).acquire().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn stays_within_extent() {
        let center = Point::new(10.0, 10.0);
        let points = ScatterSource::new(200, 7, 5.0)
            .centered_at(center)
            .acquire()
            .unwrap();
        for p in points {
            assert!((p.x - center.x).abs() <= 5.0 && (p.y - center.y).abs() <= 5.0, "{p}");
        }
    }

    #[test]
    fn zero_extent_collapses_to_center() {
        let points = ScatterSource::new(3, 0, 0.0).acquire().unwrap();
        assert_eq!(points, vec![Point::ZERO; 3]);
    }

    #[test]
    fn infinite_extent_errors() {
        let mut src = ScatterSource::new(3, 0, f64::INFINITY);
        assert!(matches!(src.acquire(), Err(SourceError::NonFinite { .. })));
    }

    #[test]
    fn extent_whose_width_overflows_errors() {
        let mut src = ScatterSource::new(4, 1, 1e308);
        assert!(matches!(src.acquire(), Err(SourceError::NonFinite { .. })));
    }

    #[test]
    fn largest_usable_extent_is_accepted() {
        let got = ScatterSource::new(4, 1, f64::MAX / 4.0).acquire().unwrap();
        assert!(got.iter().all(|p| p.is_finite()));
    }
}

// ── WithFixed ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod with_fixed {
    use super::*;

    #[test]
    fn appends_fixed_positions() {
        let mut src = ArgsSource::new(["0 0", "0 20", "20 20"], 3)
            .with_fixed(vec![Point::new(18.0, 2.0)]);
        assert_eq!(src.agent_count(), 4);
        let positions = src.acquire().unwrap();
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[3], Point::new(18.0, 2.0));
    }

    #[test]
    fn into_inner_gives_back_the_wrapped_source() {
        let mut inner = ArgsSource::new(["1 2"], 1).with_fixed(vec![Point::ZERO]).into_inner();
        assert_eq!(inner.agent_count(), 1);
        assert_eq!(inner.acquire().unwrap(), vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn inner_error_propagates() {
        let mut src = ArgsSource::new(["0 0"], 3).with_fixed(vec![Point::new(18.0, 2.0)]);
        assert!(matches!(src.acquire(), Err(SourceError::CountMismatch { .. })));
    }

    #[test]
    fn boxed_sources_are_sources() {
        let mut src: Box<dyn PositionSource> =
            Box::new(prompt("\n\n\n", square()[..3].to_vec()).with_fixed(vec![Point::new(18.0, 2.0)]));
        assert_eq!(src.agent_count(), 4);
        assert_eq!(src.acquire().unwrap()[3], Point::new(18.0, 2.0));
    }
}
