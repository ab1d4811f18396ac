// Hardware drivers on top of the board bundles.
//
// battery: ADC adapter and estimator wiring for the fitted board variant
// mode:    boot-mode strap decoding

pub mod battery;
pub mod mode;
