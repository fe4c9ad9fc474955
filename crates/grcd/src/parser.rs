//! Parser for generator output.
//!
//! The generator is prompted to answer in a fixed block template:
//!
//! ```text
//! ### Tool: <tool name>
//! Steps:
//! 1. First step
//! 2. Second step
//! ---
//! ```
//!
//! Extraction is an explicit line-oriented state machine rather than a
//! backtracking regex, so block boundaries and malformed-input behavior are
//! deterministic. Parsing is best-effort and lossy: anything outside a
//! recognized block (delimiters, closing sentinels, chatter) is ignored, and
//! malformed blocks yield fewer records instead of an error. An empty result
//! is the only failure signal.

use grc_common::ToolRecommendation;

const HEADER_MARKER: &str = "### Tool:";
const STEPS_MARKER: &str = "Steps:";

enum State {
    SeekingHeader,
    ReadingSteps {
        tool: String,
        marker_seen: bool,
        steps: Vec<String>,
    },
}

/// A step line is "1. ..." - one or more digits, a dot, then text.
fn is_step_line(line: &str) -> bool {
    let digits: usize = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}

/// Extract structured tool recommendations from raw generator text.
pub fn parse_tools(raw: &str) -> Vec<ToolRecommendation> {
    let mut tools = Vec::new();
    let mut state = State::SeekingHeader;

    for line in raw.lines() {
        let line = line.trim();
        state = step(state, line, &mut tools);
    }
    flush(state, &mut tools);

    tools
}

fn step(state: State, line: &str, tools: &mut Vec<ToolRecommendation>) -> State {
    match state {
        State::SeekingHeader => seek_header(line),
        State::ReadingSteps {
            tool,
            marker_seen: false,
            steps,
        } => {
            if line == STEPS_MARKER {
                State::ReadingSteps {
                    tool,
                    marker_seen: true,
                    steps,
                }
            } else {
                // Header without a Steps marker is a malformed block: drop it
                // and let this line start over.
                seek_header(line)
            }
        }
        State::ReadingSteps {
            tool,
            marker_seen: true,
            mut steps,
        } => {
            if is_step_line(line) {
                steps.push(line.to_string());
                State::ReadingSteps {
                    tool,
                    marker_seen: true,
                    steps,
                }
            } else {
                flush(
                    State::ReadingSteps {
                        tool,
                        marker_seen: true,
                        steps,
                    },
                    tools,
                );
                seek_header(line)
            }
        }
    }
}

fn seek_header(line: &str) -> State {
    match line.strip_prefix(HEADER_MARKER) {
        Some(rest) => State::ReadingSteps {
            tool: rest.trim().to_string(),
            marker_seen: false,
            steps: Vec::new(),
        },
        None => State::SeekingHeader,
    }
}

/// Emit the in-flight block, if it collected at least one step.
fn flush(state: State, tools: &mut Vec<ToolRecommendation>) {
    if let State::ReadingSteps {
        tool,
        marker_seen: true,
        steps,
    } = state
    {
        if !tool.is_empty() && !steps.is_empty() {
            tools.push(ToolRecommendation::new(tool, steps.join("\n")));
        }
    }
}
