//! Splits model → markup tree
//!
//! The exporter always writes the full document skeleton, including
//! placeholder elements (icons, layout path, metadata) that the model does not
//! carry. Absent times are omitted entirely.

use super::WriterOptions;
use crate::markup::Element;
use crate::schema::{Attempt, Segment, Splits};
use crate::types::{Time, timestamp::format_timestamp};

fn bool_literal(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

impl Splits {
    /// Build the document tree with default [`WriterOptions`].
    pub fn to_element(&self) -> Element {
        self.to_element_with(&WriterOptions::default())
    }

    /// Build the document tree.
    pub fn to_element_with(&self, options: &WriterOptions) -> Element {
        let mut root = Element::new("Run").attr("version", options.version.as_str());
        root.push(Element::new("GameIcon"));
        root.push(Element::with_text("GameName", self.game_name.as_str()));
        root.push(Element::with_text("CategoryName", self.category_name.as_str()));
        root.push(Element::new("LayoutPath"));
        root.push(metadata_skeleton());
        root.push(Element::with_text("Offset", self.offset.to_string()));
        root.push(Element::with_text("AttemptCount", self.attempt_count.to_string()));

        let history = root.push(Element::new("AttemptHistory"));
        for attempt in &self.attempt_history {
            history.push(export_attempt(attempt, options));
        }

        let segments = root.push(Element::new("Segments"));
        for segment in &self.segments {
            segments.push(export_segment(segment));
        }

        root.push(Element::new("AutoSplitterSettings"));
        root
    }
}

/// Run metadata the model does not track; written with fixed placeholder values.
fn metadata_skeleton() -> Element {
    Element::new("MetaData")
        .child(Element::new("Run").attr("id", ""))
        .child(Element::new("Platform").attr("usesEmulator", "False"))
        .child(Element::new("Region"))
        .child(Element::new("Variables"))
}

fn push_time(parent: &mut Element, time: &Time) {
    if let Some(real_time) = time.real_time {
        parent.push(Element::with_text("RealTime", real_time.to_string()));
    }
    if let Some(game_time) = time.game_time {
        parent.push(Element::with_text("GameTime", game_time.to_string()));
    }
}

fn export_attempt(attempt: &Attempt, options: &WriterOptions) -> Element {
    let ended_synced =
        if options.mirror_started_sync { attempt.is_started_synced } else { attempt.is_ended_synced };

    let mut element = Element::new("Attempt")
        .attr("id", attempt.id.to_string())
        .attr("started", format_timestamp(&attempt.started))
        .attr("isStartedSynced", bool_literal(attempt.is_started_synced))
        .attr("ended", format_timestamp(&attempt.ended))
        .attr("isEndedSynced", bool_literal(ended_synced));
    push_time(&mut element, &attempt.time);
    element
}

fn export_segment(segment: &Segment) -> Element {
    let mut element = Element::new("Segment");
    element.push(Element::with_text("Name", segment.name.as_str()));
    element.push(Element::new("Icon"));

    let split_times = element.push(Element::new("SplitTimes"));
    for split_time in &segment.split_times {
        let entry =
            split_times.push(Element::new("SplitTime").attr("name", split_time.comparison_name.as_str()));
        push_time(entry, &split_time.time);
    }

    push_time(element.push(Element::new("BestSegmentTime")), &segment.best_segment_time);

    let history = element.push(Element::new("SegmentHistory"));
    for entry in &segment.segment_history {
        push_time(history.push(Element::new("Time").attr("id", entry.id.to_string())), &entry.time);
    }

    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SplitTime;
    use crate::test_utils::{sample_attempt, sample_splits};
    use crate::types::{Offset, TimeSpan};

    fn child_names(element: &Element) -> Vec<&str> {
        element.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn writes_full_skeleton_in_order() {
        let root = Splits::new("Foo", "Any%").to_element();

        assert_eq!(root.attribute("version"), Some("1.7.0"));
        assert_eq!(
            child_names(&root),
            [
                "GameIcon",
                "GameName",
                "CategoryName",
                "LayoutPath",
                "MetaData",
                "Offset",
                "AttemptCount",
                "AttemptHistory",
                "Segments",
                "AutoSplitterSettings",
            ]
        );

        let metadata = root.find("MetaData").unwrap();
        assert_eq!(child_names(metadata), ["Run", "Platform", "Region", "Variables"]);
        assert_eq!(metadata.children[0].attribute("id"), Some(""));
        assert_eq!(metadata.children[1].attribute("usesEmulator"), Some("False"));
        assert_eq!(root.find("Offset").unwrap().text(), "0:00:00.0000000");
        assert_eq!(root.find("AttemptCount").unwrap().text(), "0");
    }

    #[test]
    fn attempt_attributes_follow_writer_order() {
        let root = Splits { attempt_history: vec![sample_attempt(7)], ..Default::default() }.to_element();
        let attempt = &root.find("AttemptHistory").unwrap().children[0];
        let keys: Vec<&str> = attempt.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["id", "started", "isStartedSynced", "ended", "isEndedSynced"]);
        assert_eq!(attempt.attribute("id"), Some("7"));
    }

    #[test]
    fn ended_sync_flag_is_written_from_its_own_field_by_default() {
        let mut attempt = sample_attempt(1);
        attempt.is_started_synced = true;
        attempt.is_ended_synced = false;
        let splits = Splits { attempt_history: vec![attempt], ..Default::default() };

        let fixed = splits.to_element();
        let written = &fixed.find("AttemptHistory").unwrap().children[0];
        assert_eq!(written.attribute("isStartedSynced"), Some("True"));
        assert_eq!(written.attribute("isEndedSynced"), Some("False"));

        let legacy = splits.to_element_with(&WriterOptions::default().mirror_started_sync(true));
        let written = &legacy.find("AttemptHistory").unwrap().children[0];
        assert_eq!(written.attribute("isEndedSynced"), Some("True"));
    }

    #[test]
    fn absent_times_are_omitted_but_containers_remain() {
        let segment = Segment {
            split_times: vec![SplitTime { comparison_name: "Personal Best".into(), time: Time::EMPTY }],
            ..Segment::new("Opening")
        };
        let root = Splits { segments: vec![segment], ..Default::default() }.to_element();
        let written = &root.find("Segments").unwrap().children[0];

        assert_eq!(
            child_names(written),
            ["Name", "Icon", "SplitTimes", "BestSegmentTime", "SegmentHistory"]
        );
        assert!(written.find("BestSegmentTime").unwrap().children.is_empty());
        assert!(written.find("SplitTimes").unwrap().children[0].children.is_empty());
    }

    #[test]
    fn writes_both_timing_methods_real_first() {
        let span = TimeSpan::from_hms_micros(0, 1, 0, 0).unwrap();
        let segment =
            Segment { best_segment_time: Time::new(Some(span), Some(span)), ..Segment::new("A") };
        let root = Splits { segments: vec![segment], ..Default::default() }.to_element();
        let best = root.find("Segments").unwrap().children[0].find("BestSegmentTime").unwrap();
        assert_eq!(child_names(best), ["RealTime", "GameTime"]);
        assert_eq!(best.children[0].text(), "0:01:00.0000000");
    }

    #[test]
    fn negative_offset_and_custom_version() {
        let splits = Splits {
            offset: Offset::new(TimeSpan::from_hms_micros(0, 0, 2, 0).unwrap(), true),
            ..Default::default()
        };
        let root = splits.to_element_with(&WriterOptions::default().version("1.8.0"));
        assert_eq!(root.attribute("version"), Some("1.8.0"));
        assert_eq!(root.find("Offset").unwrap().text(), "-0:00:02.0000000");
    }

    #[test]
    fn sample_run_exports_every_segment_in_order() {
        let splits = sample_splits();
        let root = splits.to_element();
        let names: Vec<&str> = root
            .find("Segments")
            .unwrap()
            .children
            .iter()
            .map(|s| s.find("Name").unwrap().text())
            .collect();
        let expected: Vec<&str> = splits.segments.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, expected);
    }
}
