//! End-to-End Narration Pipeline Tests
//!
//! Writes synthetic bags, reads them back, and drives the full
//! bag → segmenter → renderer pipeline:
//! - Concrete trajectory narration with exact output lines
//! - Empty-channel failure surfaced as an error, not silence
//! - Writer/reader round trips (order, counts, header stats)
//! - Feature extraction and prompt construction
//!
//! Run with: `cargo test --test narration_pipeline`

use std::path::Path;

use katha_nav::render::{ConsoleRenderer, InstructionRenderer, PromptBuilder, StlCommand};
use katha_nav::{
    BagReader, BagWriter, BoundingBox, ChannelKind, Detection, KathaError, OdometrySample,
    Position3D, PromptConfig, SegmenterConfig, Timestamped, TrajectoryFeatures,
    TrajectorySegmenter,
};
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

fn odometry_at(x: f32, y: f32, timestamp_us: u64) -> Timestamped<OdometrySample> {
    Timestamped::new(
        OdometrySample::at_position(Position3D::new(x, y, 0.0)),
        timestamp_us,
    )
}

fn detections_at(labels: &[&str], timestamp_us: u64) -> Timestamped<Vec<Detection>> {
    let set = labels
        .iter()
        .map(|l| Detection::new(*l, 0.8, BoundingBox::new(10, 10, 40, 80)))
        .collect();
    Timestamped::new(set, timestamp_us)
}

/// The concrete scenario track: right, right, then forward.
fn write_scenario_bag(path: &Path) {
    let mut writer = BagWriter::create(path).unwrap();
    writer.write_odometry(&odometry_at(0.0, 0.0, 1_000_000)).unwrap();
    writer.write_odometry(&odometry_at(1.0, 0.0, 1_500_000)).unwrap();
    writer.write_odometry(&odometry_at(2.0, 0.0, 2_000_000)).unwrap();
    writer.write_odometry(&odometry_at(2.0, 1.0, 2_500_000)).unwrap();
    writer.finish().unwrap();
}

// ============================================================================
// Test: Bag → Segmenter → Renderer
// ============================================================================

#[test]
fn test_scenario_bag_narrates_to_expected_lines() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("scenario.bag");
    write_scenario_bag(&bag_path);

    let mut reader = BagReader::open(&bag_path).unwrap();
    let track = reader.odometry_track().unwrap();
    assert_eq!(track.len(), 4);

    let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
    let instructions = segmenter.narrate(track.into_iter().map(|s| s.data.position));

    let mut renderer = ConsoleRenderer::new(Vec::new());
    for instruction in &instructions {
        renderer.render(instruction).unwrap();
    }
    renderer.finish().unwrap();

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(
        output,
        "Move right for 2 steps\nMove forward for 1 steps\n"
    );
}

#[test]
fn test_landmark_pass_through_survives_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("landmark.bag");

    let mut writer = BagWriter::create(&bag_path).unwrap();
    writer.write_odometry(&odometry_at(-2.0, 0.0, 1_000_000)).unwrap();
    writer.write_odometry(&odometry_at(-1.0, 0.0, 1_500_000)).unwrap();
    writer.write_odometry(&odometry_at(0.2, 0.2, 2_000_000)).unwrap();
    writer.write_odometry(&odometry_at(1.2, 0.2, 2_500_000)).unwrap();
    writer.finish().unwrap();

    let mut reader = BagReader::open(&bag_path).unwrap();
    let track = reader.odometry_track().unwrap();

    let mut segmenter = TrajectorySegmenter::new(SegmenterConfig::default());
    let lines: Vec<String> = segmenter
        .narrate(track.into_iter().map(|s| s.data.position))
        .iter()
        .map(|i| i.to_string())
        .collect();

    assert_eq!(
        lines,
        ["See a white pole and stop", "Move right for 3 steps"]
    );
}

// ============================================================================
// Test: Reader-Level Error Handling
// ============================================================================

#[test]
fn test_empty_odometry_channel_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("no_odometry.bag");

    let mut writer = BagWriter::create(&bag_path).unwrap();
    writer
        .write_detections(&detections_at(&["tree"], 1_000_000))
        .unwrap();
    writer.finish().unwrap();

    let mut reader = BagReader::open(&bag_path).unwrap();
    let err = reader.odometry_track().unwrap_err();

    assert!(matches!(
        err,
        KathaError::EmptyChannel(ChannelKind::Odometry)
    ));
    assert_eq!(
        err.to_string(),
        "no samples available for the requested channel: odometry"
    );
}

#[test]
fn test_garbage_file_rejected_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("garbage.bag");
    std::fs::write(&bag_path, vec![0xAAu8; 256]).unwrap();

    assert!(BagReader::open(&bag_path).is_err());
}

// ============================================================================
// Test: Writer/Reader Round Trip
// ============================================================================

#[test]
fn test_round_trip_preserves_order_and_counts() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("mixed.bag");

    let mut writer = BagWriter::create(&bag_path).unwrap();
    writer.write_odometry(&odometry_at(0.0, 0.0, 1_000_000)).unwrap();
    writer
        .write_detections(&detections_at(&["person", "car"], 1_200_000))
        .unwrap();
    writer.write_odometry(&odometry_at(0.5, 0.0, 1_400_000)).unwrap();
    let info = writer.finish().unwrap();

    assert_eq!(info.message_count, 3);
    assert_eq!(info.odometry_count, 2);
    assert_eq!(info.detection_count, 1);
    assert_eq!(info.duration_us, 400_000);

    let mut reader = BagReader::open(&bag_path).unwrap();
    assert_eq!(reader.message_count(), 3);
    assert_eq!(reader.header().start_time_us, 1_000_000);
    assert_eq!(reader.header().end_time_us, 1_400_000);

    let channels: Vec<ChannelKind> = std::iter::from_fn(|| reader.next_message().unwrap())
        .map(|m| m.channel())
        .collect();
    assert_eq!(
        channels,
        [
            ChannelKind::Odometry,
            ChannelKind::Detections,
            ChannelKind::Odometry
        ]
    );
}

// ============================================================================
// Test: Features and Prompt Construction
// ============================================================================

#[test]
fn test_features_and_command_request_from_bag() {
    let temp_dir = TempDir::new().unwrap();
    let bag_path = temp_dir.path().join("features.bag");

    let mut writer = BagWriter::create(&bag_path).unwrap();
    let mut sample = OdometrySample::at_position(Position3D::new(0.0, 0.0, 0.0));
    sample.angular_rate_z = 0.25;
    writer
        .write_odometry(&Timestamped::new(sample, 1_000_000))
        .unwrap();
    writer
        .write_detections(&detections_at(&["white pole"], 2_500_000))
        .unwrap();
    writer.finish().unwrap();

    let reader = BagReader::open(&bag_path).unwrap();
    let features = TrajectoryFeatures::collect(reader.map(|m| m.unwrap()));

    assert_eq!(features.message_count(), 2);
    assert_eq!(features.turn_rates.len(), 1);
    assert_eq!(features.object_events.len(), 1);
    assert_eq!(features.object_events[0].data.label, "white pole");

    let builder = PromptBuilder::new(PromptConfig::default());
    let request = builder.command_request(&features);
    assert_eq!(
        request,
        "Directions: 0.25\n\
         Objects encountered at times: 2.50\n\
         Timestamps: 1.00, 2.50\n\
         Generate STL command for these inputs:"
    );
}

#[test]
fn test_stl_command_wrapping() {
    let builder = PromptBuilder::new(PromptConfig::default());
    let mut features = TrajectoryFeatures::new();
    features.object_events.push(Timestamped::new(
        Detection::new("tree", 0.66, BoundingBox::new(0, 0, 10, 50)),
        1_000_000,
    ));

    let description = builder.path_description(&features, &[]);
    let command = StlCommand::globally(description);

    assert!(command.as_str().starts_with("G(Describe a path"));
    assert!(command.as_str().ends_with(")"));
    assert!(command
        .as_str()
        .contains("Pass by a tree with confidence 0.66"));
}
