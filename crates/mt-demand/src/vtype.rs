//! Vehicle type declared once at the top of the route file.

/// SUMO `<vType>` parameters shared by every generated vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleType {
    pub id:           String,
    /// m/s²
    pub accel:        f64,
    /// m/s²
    pub decel:        f64,
    /// Driver imperfection, `[0, 1]`.
    pub sigma:        f64,
    /// m
    pub length:       f64,
    /// m
    pub width:        f64,
    /// m/s
    pub max_speed:    f64,
    pub speed_factor: f64,
}

impl Default for VehicleType {
    fn default() -> Self {
        Self {
            id:           "manet_vehicle".to_owned(),
            accel:        2.0,
            decel:        4.0,
            sigma:        0.3,
            length:       4.5,
            width:        1.8,
            max_speed:    13.89,
            speed_factor: 0.9,
        }
    }
}
