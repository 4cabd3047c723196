use lightsout_data::LIGHT_COUNT;

/// The five-lamp gantry. Only the round engine mutates it.
///
/// Go is signalled by every lamp going dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LightBank {
    lamps: [bool; LIGHT_COUNT],
}

impl LightBank {
    pub fn lamps(&self) -> [bool; LIGHT_COUNT] {
        self.lamps
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.lamps.get(index).copied().unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.lamps.iter().filter(|on| **on).count()
    }

    pub fn is_dark(&self) -> bool {
        self.lit_count() == 0
    }

    pub(crate) fn set(&mut self, index: usize, on: bool) -> bool {
        match self.lamps.get_mut(index) {
            Some(lamp) if *lamp != on => {
                *lamp = on;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn extinguish(&mut self) {
        self.lamps = [false; LIGHT_COUNT];
    }
}

impl std::fmt::Display for LightBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<&str> = self
            .lamps
            .iter()
            .map(|on| if *on { "(#)" } else { "( )" })
            .collect();
        f.write_str(&row.join(" "))
    }
}
