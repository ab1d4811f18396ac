// Built-in single-cell Li-ion tables, cell voltage in mV.
//
// DISCHARGE_DENSE: single-curve boards, 22 knots packed around the
//                  3.6-3.9V plateau where most of the charge sits.
// CHARGING / DISCHARGING: charge-aware boards. The cell reads higher
//                  under charge current, so the charging curve reaches
//                  each percentage at a lower voltage.

use crate::curve::{Curve, Knot};

const DISCHARGE_DENSE_KNOTS: [Knot; 22] = [
    Knot::new(3000, 0),
    Knot::new(3050, 1),
    Knot::new(3410, 5),
    Knot::new(3490, 8),
    Knot::new(3570, 13),
    Knot::new(3640, 21),
    Knot::new(3665, 27),
    Knot::new(3685, 31),
    Knot::new(3705, 36),
    Knot::new(3725, 41),
    Knot::new(3745, 45),
    Knot::new(3765, 49),
    Knot::new(3790, 54),
    Knot::new(3810, 58),
    Knot::new(3845, 64),
    Knot::new(3865, 69),
    Knot::new(3900, 74),
    Knot::new(3935, 79),
    Knot::new(3975, 84),
    Knot::new(4020, 88),
    Knot::new(4080, 93),
    Knot::new(4190, 100),
];

const CHARGING_KNOTS: [Knot; 13] = [
    Knot::new(3000, 0),
    Knot::new(3200, 5),
    Knot::new(3350, 10),
    Knot::new(3450, 15),
    Knot::new(3550, 20),
    Knot::new(3630, 30),
    Knot::new(3700, 40),
    Knot::new(3770, 50),
    Knot::new(3820, 60),
    Knot::new(3870, 70),
    Knot::new(3920, 80),
    Knot::new(4050, 90),
    Knot::new(4200, 100),
];

const DISCHARGING_KNOTS: [Knot; 13] = [
    Knot::new(3000, 0),
    Knot::new(3230, 5),
    Knot::new(3380, 10),
    Knot::new(3480, 15),
    Knot::new(3600, 20),
    Knot::new(3680, 30),
    Knot::new(3750, 40),
    Knot::new(3820, 50),
    Knot::new(3860, 60),
    Knot::new(3910, 70),
    Knot::new(3960, 80),
    Knot::new(4080, 90),
    Knot::new(4200, 100),
];

pub const DISCHARGE_DENSE: Curve = Curve::from_table(&DISCHARGE_DENSE_KNOTS);
pub const CHARGING: Curve = Curve::from_table(&CHARGING_KNOTS);
pub const DISCHARGING: Curve = Curve::from_table(&DISCHARGING_KNOTS);
