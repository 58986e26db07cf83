//! Boolean guard predicates evaluated by the host engine
//!
//! Predicates are immutable expression trees built once during generation
//! and emitted verbatim: no flattening, reordering, or simplification is
//! applied, because the constructed nesting is part of the artifact.
//! Evaluation (including sampling of random guards) happens host-side at
//! trigger-fire time; this crate only constructs values.

use serde::Serialize;

use crate::core::types::IVec3;

/// A boolean guard over world/self state, evaluated by the host against
/// the block a trigger fired on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
    Not(Box<Predicate>),
    Random(RandomChance),
    BlockAt(BlockAt),
    #[serde(rename = "srcBlockState")]
    SrcBlockState(SrcBlockState),
}

/// Independent Bernoulli trial sampled by the host on every evaluation.
///
/// No seed or generator state is owned here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomChance {
    #[serde(rename = "normalChance")]
    pub normal_chance: f64,
}

/// Tag query against the block at a relative offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockAt {
    #[serde(rename = "xOff")]
    pub x_off: i32,
    #[serde(rename = "yOff")]
    pub y_off: i32,
    #[serde(rename = "zOff")]
    pub z_off: i32,
    pub has_tag: String,
}

/// Parameter equality test against a block state, defaulting to the
/// block the trigger fired on when no offset is given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SrcBlockState {
    #[serde(rename = "xOff", skip_serializing_if = "Option::is_none")]
    pub x_off: Option<i32>,
    #[serde(rename = "yOff", skip_serializing_if = "Option::is_none")]
    pub y_off: Option<i32>,
    #[serde(rename = "zOff", skip_serializing_if = "Option::is_none")]
    pub z_off: Option<i32>,
    pub has_param: HasParam,
}

/// The (param, value) pair a [`SrcBlockState`] test compares.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HasParam {
    pub param: String,
    pub value: String,
}

impl Predicate {
    /// Conjunction of the given predicates, preserving their exact order
    /// and nesting.
    ///
    /// Panics when `terms` is empty: a zero-term conjunction is ambiguous.
    pub fn all(terms: impl IntoIterator<Item = Predicate>) -> Predicate {
        let terms: Vec<Predicate> = terms.into_iter().collect();
        assert!(!terms.is_empty(), "conjunction over zero predicates is ambiguous");
        Predicate::And(terms)
    }

    /// Disjunction of the given predicates, preserving their exact order
    /// and nesting.
    ///
    /// Panics when `terms` is empty: a zero-term disjunction is ambiguous.
    pub fn any(terms: impl IntoIterator<Item = Predicate>) -> Predicate {
        let terms: Vec<Predicate> = terms.into_iter().collect();
        assert!(!terms.is_empty(), "disjunction over zero predicates is ambiguous");
        Predicate::Or(terms)
    }

    /// Negation of a predicate.
    pub fn not(term: Predicate) -> Predicate {
        Predicate::Not(Box::new(term))
    }

    /// Bernoulli guard with success probability `chance`.
    ///
    /// Panics unless `chance` lies in (0, 1].
    pub fn random(chance: f64) -> Predicate {
        assert!(
            chance > 0.0 && chance <= 1.0,
            "random chance {chance} outside (0, 1]"
        );
        Predicate::Random(RandomChance { normal_chance: chance })
    }

    /// Tag test against the neighbor at `offset`.
    pub fn block_at(offset: IVec3, tag: impl Into<String>) -> Predicate {
        Predicate::BlockAt(BlockAt {
            x_off: offset.x,
            y_off: offset.y,
            z_off: offset.z,
            has_tag: tag.into(),
        })
    }

    /// Parameter equality test against this block's own state.
    pub fn has_param(param: impl Into<String>, value: impl Into<String>) -> Predicate {
        Predicate::SrcBlockState(SrcBlockState {
            x_off: None,
            y_off: None,
            z_off: None,
            has_param: HasParam { param: param.into(), value: value.into() },
        })
    }

    /// Parameter equality test against the block state at `offset`.
    pub fn has_param_at(
        offset: IVec3,
        param: impl Into<String>,
        value: impl Into<String>,
    ) -> Predicate {
        Predicate::SrcBlockState(SrcBlockState {
            x_off: Some(offset.x),
            y_off: Some(offset.y),
            z_off: Some(offset.z),
            has_param: HasParam { param: param.into(), value: value.into() },
        })
    }
}
