//! Markup tree → splits model
//!
//! Tags are dispatched through explicit allow-lists. Unrecognized tags are
//! skipped so that documents written by newer tools still load, but every
//! field that a recognized record requires must be present and well-formed:
//! the first violation aborts the whole parse.

use crate::markup::Element;
use crate::schema::{Attempt, Segment, SegmentTimes, SplitTime, Splits};
use crate::types::{GameTime, Offset, RealTime, Time, TimeSpan, timestamp::parse_timestamp};
use crate::{Result, SplitsError};
use tracing::{trace, warn};

/// Values of boolean attributes are compared against this literal, case-sensitively.
const TRUE_LITERAL: &str = "True";

impl Splits {
    /// Build a run from the root `Run` element of a splits document.
    pub fn from_element(root: &Element) -> Result<Splits> {
        if root.name != "Run" {
            return Err(SplitsError::UnexpectedRoot {
                expected: "Run".to_string(),
                found: root.name.clone(),
            });
        }

        let mut splits = Splits::default();
        for child in &root.children {
            match child.name.as_str() {
                "GameName" => splits.game_name = child.text().to_string(),
                "CategoryName" => splits.category_name = child.text().to_string(),
                "AttemptCount" => splits.attempt_count = parse_count(child)?,
                "Offset" => splits.offset = Offset::parse(child.text())?,
                "AttemptHistory" => splits.attempt_history = parse_attempt_history(child)?,
                "Segments" => splits.segments = parse_segments(child)?,
                other => ignore(&root.name, other),
            }
        }

        let history_len = i64::try_from(splits.attempt_history.len()).unwrap_or(i64::MAX);
        if splits.attempt_count < history_len {
            warn!(
                attempt_count = splits.attempt_count,
                history_len,
                "AttemptCount is smaller than the attempt history; keeping stored value"
            );
        }

        Ok(splits)
    }
}

fn ignore(parent: &str, tag: &str) {
    trace!(within = parent, tag, "Ignoring unrecognized element");
}

fn parse_count(element: &Element) -> Result<i64> {
    let raw = element.text();
    raw.trim()
        .parse()
        .map_err(|e| SplitsError::format_error(element.name.as_str(), format!("{raw:?}: {e}")))
}

fn parse_id(element: &Element) -> Result<i32> {
    let raw = element.required_attribute("id")?;
    raw.trim()
        .parse()
        .map_err(|e| SplitsError::format_error(format!("{} id", element.name), format!("{raw:?}: {e}")))
}

fn parse_flag(element: &Element, attribute: &str) -> Result<bool> {
    Ok(element.required_attribute(attribute)? == TRUE_LITERAL)
}

/// Collect the `RealTime` / `GameTime` children of an element.
fn parse_time(element: &Element) -> Result<Time> {
    let mut time = Time::EMPTY;
    for child in &element.children {
        match child.name.as_str() {
            "RealTime" => time.real_time = Some(RealTime(TimeSpan::parse(child.text())?)),
            "GameTime" => time.game_time = Some(GameTime(TimeSpan::parse(child.text())?)),
            other => ignore(&element.name, other),
        }
    }
    Ok(time)
}

fn parse_attempt_history(history: &Element) -> Result<Vec<Attempt>> {
    let mut attempts = Vec::with_capacity(history.children.len());
    for child in &history.children {
        match child.name.as_str() {
            "Attempt" => attempts.push(parse_attempt(child)?),
            other => ignore(&history.name, other),
        }
    }
    Ok(attempts)
}

fn parse_attempt(element: &Element) -> Result<Attempt> {
    let id = parse_id(element)?;
    let is_started_synced = parse_flag(element, "isStartedSynced")?;
    let is_ended_synced = parse_flag(element, "isEndedSynced")?;
    let started = parse_timestamp(element.required_attribute("started")?)?;
    let ended = parse_timestamp(element.required_attribute("ended")?)?;

    Ok(Attempt {
        id,
        started,
        is_started_synced,
        ended,
        is_ended_synced,
        time: parse_time(element)?,
    })
}

fn parse_segments(segments: &Element) -> Result<Vec<Segment>> {
    let mut parsed = Vec::with_capacity(segments.children.len());
    for child in &segments.children {
        match child.name.as_str() {
            "Segment" => parsed.push(parse_segment(child)?),
            other => ignore(&segments.name, other),
        }
    }
    Ok(parsed)
}

fn parse_segment(element: &Element) -> Result<Segment> {
    let mut segment = Segment::default();
    for child in &element.children {
        match child.name.as_str() {
            "Name" => segment.name = child.text().to_string(),
            "SplitTimes" => segment.split_times = parse_split_times(child)?,
            "BestSegmentTime" => segment.best_segment_time = parse_time(child)?,
            "SegmentHistory" => segment.segment_history = parse_segment_history(child)?,
            other => ignore(&element.name, other),
        }
    }
    Ok(segment)
}

fn parse_split_times(split_times: &Element) -> Result<Vec<SplitTime>> {
    let mut parsed = Vec::with_capacity(split_times.children.len());
    for child in &split_times.children {
        match child.name.as_str() {
            "SplitTime" => parsed.push(SplitTime {
                comparison_name: child.required_attribute("name")?.to_string(),
                time: parse_time(child)?,
            }),
            other => ignore(&split_times.name, other),
        }
    }
    Ok(parsed)
}

fn parse_segment_history(history: &Element) -> Result<Vec<SegmentTimes>> {
    let mut parsed = Vec::with_capacity(history.children.len());
    for child in &history.children {
        match child.name.as_str() {
            "Time" => parsed.push(SegmentTimes { id: parse_id(child)?, time: parse_time(child)? }),
            other => ignore(&history.name, other),
        }
    }
    Ok(parsed)
}
