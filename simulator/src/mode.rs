/// Paint tool selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Solid,
    Fluid,
    Deletion,
}

/// How a mode is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDisplay {
    /// sRGB color of the mode swatch.
    pub color: [u8; 3],
    pub label: &'static str,
}

impl Mode {
    /// Solid -> Fluid -> Deletion -> Solid.
    pub fn next(self) -> Self {
        match self {
            Mode::Solid => Mode::Fluid,
            Mode::Fluid => Mode::Deletion,
            Mode::Deletion => Mode::Solid,
        }
    }

    pub fn display(self) -> ModeDisplay {
        display(self)
    }
}

pub fn display(mode: Mode) -> ModeDisplay {
    match mode {
        Mode::Solid => ModeDisplay {
            color: [0x80, 0x80, 0x80],
            label: "Solid",
        },
        Mode::Fluid => ModeDisplay {
            color: [0x1e, 0x90, 0xff],
            label: "Fluid",
        },
        Mode::Deletion => ModeDisplay {
            color: [0xff, 0x45, 0x45],
            label: "Deletion",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_solid() {
        assert_eq!(Mode::default(), Mode::Solid);
    }

    #[test]
    fn three_advances_return_to_start() {
        let mut mode = Mode::Solid;
        let mut seen = vec![mode];
        for _ in 0..3 {
            let next = mode.next();
            assert_ne!(next, mode);
            mode = next;
            seen.push(mode);
        }
        assert_eq!(seen, vec![Mode::Solid, Mode::Fluid, Mode::Deletion, Mode::Solid]);
    }

    #[test]
    fn every_mode_has_a_distinct_presentation() {
        let all = [Mode::Solid, Mode::Fluid, Mode::Deletion];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.display().color, b.display().color);
                assert_ne!(a.display().label, b.display().label);
            }
        }
        assert_eq!(display(Mode::Deletion).label, "Deletion");
    }
}
