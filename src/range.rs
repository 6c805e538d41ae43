/// One numeric search dimension: an exact value and/or a `[min, max]` pair.
///
/// The three slots are independent and may all be set at once. When encoded,
/// `value` wins and the pair is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    value: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
}

impl RangeFilter {
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = Some(value);
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn min(&self) -> Option<u32> {
        self.min
    }

    pub fn set_min(&mut self, min: u32) {
        self.min = Some(min);
    }

    pub fn clear_min(&mut self) {
        self.min = None;
    }

    pub fn max(&self) -> Option<u32> {
        self.max
    }

    pub fn set_max(&mut self, max: u32) {
        self.max = Some(max);
    }

    pub fn clear_max(&mut self) {
        self.max = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.min.is_none() && self.max.is_none()
    }

    /// `N`, `MIN-MAX`, `MIN-` or `-MAX`.
    pub fn encode(&self) -> Option<String> {
        if let Some(value) = self.value {
            return Some(value.to_string());
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!("{min}-{max}")),
            (Some(min), None) => Some(format!("{min}-")),
            (None, Some(max)) => Some(format!("-{max}")),
            (None, None) => None,
        }
    }
}
