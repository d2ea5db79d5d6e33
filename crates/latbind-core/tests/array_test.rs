//! Tests for latbind-core: dtype families, same-kind casting, and return
//! normalization.

use half::f16;
use latbind_core::models::{ArrayValue, Dtype, ModifierKind, ModifierReturn};
use ndarray::Array1;
use num_complex::Complex64;

fn f64_array(values: &[f64]) -> ArrayValue {
    ArrayValue::F64(Array1::from_vec(values.to_vec()))
}

fn c64_array(len: usize, im: f64) -> ArrayValue {
    ArrayValue::C64(Array1::from_elem(len, Complex64::new(1.0, im)))
}

// ─── Dtype queries ───

#[test]
fn dtype_complex_queries() {
    assert!(Dtype::C64.is_complex());
    assert!(!Dtype::F16.is_complex());
    assert!(Dtype::F64.is_real());
}

#[test]
fn array_value_reports_dtype_and_len() {
    let v = f64_array(&[1.0, 2.0, 3.0]);
    assert_eq!(v.dtype(), Dtype::F64);
    assert_eq!(v.len(), 3);
    assert!(!v.is_complex());
    assert!(c64_array(2, 0.5).is_complex());
}

// ─── Same-kind casting ───

#[test]
fn real_to_real_casts_in_both_directions() {
    let wide = f64_array(&[0.5]);
    let narrow = wide.cast_same_kind(Dtype::F16).unwrap();
    assert_eq!(narrow.dtype(), Dtype::F16);

    let back = narrow.cast_same_kind(Dtype::F64).unwrap();
    assert_eq!(back.dtype(), Dtype::F64);
    assert_eq!(back.to_real().unwrap()[0], 0.5);
}

#[test]
fn real_to_complex_is_same_kind() {
    let v = f64_array(&[2.0]);
    let cast = v.cast_same_kind(Dtype::C64).unwrap();
    assert_eq!(cast.to_complex()[0], Complex64::new(2.0, 0.0));
}

#[test]
fn complex_to_real_is_not_same_kind() {
    let v = c64_array(4, 1.0);
    assert!(v.cast_same_kind(Dtype::F64).is_none());
    assert!(v.cast_same_kind(Dtype::F32).is_none());
    assert!(v.cast_same_kind(Dtype::F16).is_none());
}

#[test]
fn cast_to_own_dtype_is_identity() {
    let v = ArrayValue::F16(Array1::from_elem(2, f16::from_f32(0.25)));
    assert_eq!(v.cast_same_kind(Dtype::F16).unwrap(), v);
}

// ─── Return normalization ───

#[test]
fn single_array_normalizes_to_one_element_list() {
    let ret = ModifierReturn::Array(f64_array(&[1.0]));
    assert_eq!(ret.into_arrays().unwrap().len(), 1);
}

#[test]
fn scalar_does_not_normalize_to_arrays() {
    assert!(ModifierReturn::Scalar(3.0).into_arrays().is_none());
}

#[test]
fn return_complex_detection_spans_all_members() {
    let mixed = ModifierReturn::Arrays(vec![f64_array(&[1.0]), c64_array(1, 2.0)]);
    assert!(mixed.is_complex());
    let real = ModifierReturn::Arrays(vec![f64_array(&[1.0]), f64_array(&[2.0])]);
    assert!(!real.is_complex());
    assert!(!ModifierReturn::Scalar(1.0).is_complex());
}

// ─── Kind tables ───

#[test]
fn kind_serializes_by_variant_name() {
    let json = serde_json::to_string(&ModifierKind::HoppingEnergy).unwrap();
    assert_eq!(json, "\"HoppingEnergy\"");
    let back: ModifierKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ModifierKind::HoppingEnergy);
}

#[test]
fn entry_names_match_registration_functions() {
    assert_eq!(ModifierKind::SiteState.entry_name(), "site_state");
    assert_eq!(ModifierKind::Position.entry_name(), "site_position");
    assert_eq!(ModifierKind::OnsiteEnergy.entry_name(), "onsite_energy");
    assert_eq!(ModifierKind::HoppingEnergy.entry_name(), "hopping_energy");
}
