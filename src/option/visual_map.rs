use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualMapKind {
    Piecewise,
}

/// One interval of a piecewise visual map. Unset bounds are open-ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualPiece {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gte: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lte: Option<f64>,
    pub color: String,
}

impl VisualPiece {
    /// Open interval `(lower, upper)`.
    #[must_use]
    pub fn open(lower: f64, upper: f64, color: impl Into<String>) -> Self {
        Self {
            gt: Some(lower),
            lt: Some(upper),
            color: color.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.gt.is_none_or(|bound| value > bound)
            && self.gte.is_none_or(|bound| value >= bound)
            && self.lt.is_none_or(|bound| value < bound)
            && self.lte.is_none_or(|bound| value <= bound)
    }

    pub fn validate(&self) -> ChartResult<()> {
        let bounds = [self.gt, self.gte, self.lt, self.lte];
        if bounds.iter().all(Option::is_none) {
            return Err(ChartError::InvalidData(
                "visual map piece needs at least one bound".to_owned(),
            ));
        }
        if bounds.iter().flatten().any(|bound| !bound.is_finite()) {
            return Err(ChartError::InvalidData(
                "visual map piece bounds must be finite".to_owned(),
            ));
        }
        if self.gt.is_some() && self.gte.is_some() || self.lt.is_some() && self.lte.is_some() {
            return Err(ChartError::InvalidData(
                "visual map piece mixes strict and inclusive bounds on one side".to_owned(),
            ));
        }
        let lower = self.gt.or(self.gte);
        let upper = self.lt.or(self.lte);
        if let (Some(lower), Some(upper)) = (lower, upper) {
            let closed = self.gte.is_some() && self.lte.is_some();
            if lower > upper || (lower == upper && !closed) {
                return Err(ChartError::InvalidData(format!(
                    "visual map piece interval ({lower}, {upper}) is empty"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMap {
    #[serde(rename = "type")]
    pub kind: VisualMapKind,
    pub show: bool,
    /// Data dimension tested against the pieces; `0` is the x value.
    pub dimension: usize,
    pub series_index: usize,
    pub pieces: Vec<VisualPiece>,
}

impl VisualMap {
    /// Hidden piecewise map over the x dimension of one series.
    #[must_use]
    pub fn hidden_x_pieces(series_index: usize, pieces: Vec<VisualPiece>) -> Self {
        Self {
            kind: VisualMapKind::Piecewise,
            show: false,
            dimension: 0,
            series_index,
            pieces,
        }
    }

    /// Color of the first piece containing `value`.
    #[must_use]
    pub fn color_for(&self, value: f64) -> Option<&str> {
        self.pieces
            .iter()
            .find(|piece| piece.contains(value))
            .map(|piece| piece.color.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_piece_excludes_its_bounds() {
        let piece = VisualPiece::open(1.0, 3.0, "blue");
        assert!(!piece.contains(1.0));
        assert!(piece.contains(2.0));
        assert!(!piece.contains(3.0));
    }

    #[test]
    fn color_for_picks_first_matching_piece() {
        let map = VisualMap::hidden_x_pieces(
            0,
            vec![
                VisualPiece::open(1.0, 3.0, "first"),
                VisualPiece::open(2.0, 4.0, "second"),
            ],
        );
        assert_eq!(map.color_for(2.5), Some("first"));
        assert_eq!(map.color_for(3.5), Some("second"));
        assert_eq!(map.color_for(9.0), None);
    }

    #[test]
    fn degenerate_pieces_are_rejected() {
        assert!(VisualPiece::default().validate().is_err());
        assert!(VisualPiece::open(3.0, 3.0, "x").validate().is_err());
        assert!(VisualPiece::open(4.0, 3.0, "x").validate().is_err());
        let point = VisualPiece {
            gte: Some(3.0),
            lte: Some(3.0),
            color: "x".to_owned(),
            ..VisualPiece::default()
        };
        assert!(point.validate().is_ok());
    }
}
