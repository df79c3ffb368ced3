// Domain layer: the validated input type. No dependencies beyond std.

pub mod model;
