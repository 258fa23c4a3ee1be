/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::command::*;
use crate::consts::*;
use crate::error::PathError;
use crate::geo::{Coord2, Coordinate};

use log::trace;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PreviousCurveKind {
    None,
    Quadratic,
    Cubic,
}

///
/// Splits a raw command list at `Move` commands, absolutizes every command (resolving smooth
/// reflections and H/V expansion), and ensures every resulting subpath is explicitly closed
///
pub fn normalize_path(commands: &[Command]) -> Result<Vec<Subpath>, PathError> {
    let mut subpaths = vec![];
    let mut current_commands: Vec<Command> = vec![];
    let mut seen_move = false;

    for (index, command) in commands.iter().enumerate() {
        match command {
            Command::Move { .. } => {
                if seen_move {
                    subpaths.push(normalize_subpath(&current_commands)?);
                    current_commands.clear();
                }
                seen_move = true;
                current_commands.push(*command);
            }
            _ => {
                if !seen_move {
                    return Err(PathError::MalformedSubpath {
                        index,
                        message: "subpath has no leading Move command".to_string(),
                    });
                }
                current_commands.push(*command);
            }
        }
    }

    if seen_move {
        subpaths.push(normalize_subpath(&current_commands)?);
    }

    Ok(subpaths)
}

fn normalize_subpath(commands: &[Command]) -> Result<Subpath, PathError> {
    let move_command = match commands.first() {
        Some(Command::Move { x, y, relative }) => {
            // The first Move in a subpath is always interpreted as absolute: there is no prior
            // current point for a relative offset to apply to.
            let _ = relative;
            Coord2(*x, *y)
        }
        _ => {
            return Err(PathError::MalformedSubpath {
                index: 0,
                message: "subpath does not begin with a Move command".to_string(),
            })
        }
    };

    let mut current = move_command;
    let mut previous_control: Option<Coord2> = None;
    let mut previous_curve_kind = PreviousCurveKind::None;
    let mut abs_commands = vec![];

    for (i_command, command) in commands.iter().enumerate().skip(1) {
        let (geometry, new_previous_control, new_curve_kind) =
            absolutize(command, current, previous_control, previous_curve_kind, i_command)?;

        if let Some(geometry) = geometry {
            current = geometry.end();
            abs_commands.push(AbsCommand {
                i_command,
                geometry,
                previous_control_point: new_previous_control,
                i_first_point: None,
                i_last_point: None,
                synthetic: false,
            });
        }

        previous_control = new_previous_control;
        previous_curve_kind = new_curve_kind;
    }

    // Explicit closure: append a synthetic line back to the Move point if needed
    if current.distance_to(&move_command) > EPSILON_INTERSECT {
        trace!("normalize_path: appending synthetic closing line");
        abs_commands.push(AbsCommand {
            i_command: commands.len(),
            geometry: AbsGeometry::Line {
                start: current,
                end: move_command,
            },
            previous_control_point: None,
            i_first_point: None,
            i_last_point: None,
            synthetic: true,
        });
        current = move_command;
    }

    if current.distance_to(&move_command) > EPSILON_INTERSECT {
        return Err(PathError::NotClosed {
            index: commands.len(),
            message: "subpath start and end still differ after appending a synthetic closing segment".to_string(),
        });
    }

    Ok(Subpath {
        start: move_command,
        commands: abs_commands,
    })
}

fn absolutize(
    command: &Command,
    current: Coord2,
    previous_control: Option<Coord2>,
    previous_curve_kind: PreviousCurveKind,
    i_command: usize,
) -> Result<(Option<AbsGeometry>, Option<Coord2>, PreviousCurveKind), PathError> {
    let resolve = |x: f64, y: f64, relative: bool| -> Coord2 {
        if relative {
            current + Coord2(x, y)
        } else {
            Coord2(x, y)
        }
    };

    match *command {
        Command::Move { .. } => Err(PathError::MalformedSubpath {
            index: i_command,
            message: "unexpected Move command in the interior of a subpath".to_string(),
        }),

        Command::Close => {
            // Close is handled by the caller via the explicit-closure step; it contributes no
            // geometry of its own beyond what that step already inserts.
            Ok((None, None, PreviousCurveKind::None))
        }

        Command::Line { x, y, relative } => {
            let end = resolve(x, y, relative);
            Ok((
                Some(AbsGeometry::Line { start: current, end }),
                None,
                PreviousCurveKind::None,
            ))
        }

        Command::HLine { x, relative } => {
            let end = if relative {
                Coord2(current.0 + x, current.1)
            } else {
                Coord2(x, current.1)
            };
            Ok((
                Some(AbsGeometry::Line { start: current, end }),
                None,
                PreviousCurveKind::None,
            ))
        }

        Command::VLine { y, relative } => {
            let end = if relative {
                Coord2(current.0, current.1 + y)
            } else {
                Coord2(current.0, y)
            };
            Ok((
                Some(AbsGeometry::Line { start: current, end }),
                None,
                PreviousCurveKind::None,
            ))
        }

        Command::QuadBez { cx, cy, x, y, relative } => {
            let control = resolve(cx, cy, relative);
            let end = resolve(x, y, relative);
            Ok((
                Some(AbsGeometry::Quadratic {
                    start: current,
                    control,
                    end,
                }),
                Some(control),
                PreviousCurveKind::Quadratic,
            ))
        }

        Command::QuadBezSmooth { x, y, relative } => {
            let control = reflect(current, previous_control, previous_curve_kind, PreviousCurveKind::Quadratic);
            let end = resolve(x, y, relative);
            Ok((
                Some(AbsGeometry::Quadratic {
                    start: current,
                    control,
                    end,
                }),
                Some(control),
                PreviousCurveKind::Quadratic,
            ))
        }

        Command::CubicBez { c1x, c1y, c2x, c2y, x, y, relative } => {
            let control1 = resolve(c1x, c1y, relative);
            let control2 = resolve(c2x, c2y, relative);
            let end = resolve(x, y, relative);
            Ok((
                Some(AbsGeometry::Cubic {
                    start: current,
                    control1,
                    control2,
                    end,
                }),
                Some(control2),
                PreviousCurveKind::Cubic,
            ))
        }

        Command::CubicBezSmooth { c2x, c2y, x, y, relative } => {
            let control1 = reflect(current, previous_control, previous_curve_kind, PreviousCurveKind::Cubic);
            let control2 = resolve(c2x, c2y, relative);
            let end = resolve(x, y, relative);
            Ok((
                Some(AbsGeometry::Cubic {
                    start: current,
                    control1,
                    control2,
                    end,
                }),
                Some(control2),
                PreviousCurveKind::Cubic,
            ))
        }
    }
}

///
/// Reflects the previous control point across the current point, per the smooth-command rule
///
/// If the previous command was not a curve of the matching kind, the reflection collapses to the
/// current point.
///
fn reflect(
    current: Coord2,
    previous_control: Option<Coord2>,
    previous_curve_kind: PreviousCurveKind,
    required_kind: PreviousCurveKind,
) -> Coord2 {
    match (previous_control, previous_curve_kind == required_kind) {
        (Some(control), true) => current + (current - control),
        _ => current,
    }
}
