//! Analog face view-model
//!
//! Angles are in degrees, 0 at twelve o'clock, growing clockwise. Endpoints
//! are in face coordinates with the origin top-left and y growing downward.

use chrono::{NaiveDateTime, Timelike};

use crate::{
    core::cmd::Cmd,
    domain::schedule::{analog_period, TickSource, DEFAULT_FPS},
};

pub const DEFAULT_FACE_SIZE: f64 = 400.0;

/// Geometry of the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub size: f64,
    pub center: f64,
    pub radius: f64,
}

/// One of the sixty marks around the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub inner: (f64, f64),
    pub outer: (f64, f64),
    /// Every fifth mark (the hours)
    pub major: bool,
}

impl FaceGeometry {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            center: size / 2.0,
            radius: size / 2.0 - 20.0,
        }
    }

    pub fn tick_marks(&self) -> Vec<TickMark> {
        (0..60)
            .map(|i| {
                let angle = f64::from(i) * 6.0;
                TickMark {
                    inner: endpoint(self.center, self.radius - 10.0, angle),
                    outer: endpoint(self.center, self.radius, angle),
                    major: i % 5 == 0,
                }
            })
            .collect()
    }
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_FACE_SIZE)
    }
}

/// Hand angles for an instant, each carrying the fraction of finer units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(local: &NaiveDateTime) -> Self {
        // Leap seconds report nanoseconds past 1e9; pin them to the same second.
        let micros = f64::from(local.nanosecond().min(999_999_999) / 1_000);
        let second = f64::from(local.second()) + micros / 1_000_000.0;
        let minute = f64::from(local.minute()) + second / 60.0;
        let hour = f64::from(local.hour() % 12) + minute / 60.0;

        Self {
            hour: hour / 12.0 * 360.0,
            minute: minute / 60.0 * 360.0,
            second: second / 60.0 * 360.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Hand length as a fraction of the dial radius
    pub fn length_ratio(self) -> f64 {
        match self {
            HandKind::Hour => 0.5,
            HandKind::Minute => 0.75,
            HandKind::Second => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand {
    pub kind: HandKind,
    pub angle: f64,
    pub length: f64,
    pub tip: (f64, f64),
}

impl Hand {
    fn pointing(kind: HandKind, face: &FaceGeometry, angle: f64) -> Self {
        let length = kind.length_ratio() * face.radius;
        Self {
            kind,
            angle,
            length,
            tip: endpoint(face.center, length, angle),
        }
    }
}

/// `center + length * (sin a, -cos a)`
pub fn endpoint(center: f64, length: f64, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (
        center + length * angle.sin(),
        center - length * angle.cos(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalogState {
    fps: u32,
    face: FaceGeometry,
    hands: [Hand; 3],
}

impl AnalogState {
    pub fn new(fps: u32) -> Self {
        Self::with_face(fps, FaceGeometry::default())
    }

    pub fn with_face(fps: u32, face: FaceGeometry) -> Self {
        Self {
            fps: fps.max(1),
            face,
            hands: [
                Hand::pointing(HandKind::Hour, &face, 0.0),
                Hand::pointing(HandKind::Minute, &face, 0.0),
                Hand::pointing(HandKind::Second, &face, 0.0),
            ],
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn face(&self) -> &FaceGeometry {
        &self.face
    }

    /// Hour, minute and second hands, in drawing order.
    pub fn hands(&self) -> &[Hand; 3] {
        &self.hands
    }

    pub fn set_time(&mut self, local: &NaiveDateTime) {
        let angles = HandAngles::at(local);
        self.hands = [
            Hand::pointing(HandKind::Hour, &self.face, angles.hour),
            Hand::pointing(HandKind::Minute, &self.face, angles.minute),
            Hand::pointing(HandKind::Second, &self.face, angles.second),
        ];
    }

    /// Moves the hands and asks for the next frame. This loop never ends.
    pub fn tick(&mut self, local: &NaiveDateTime) -> Vec<Cmd> {
        self.set_time(local);
        vec![Cmd::schedule(TickSource::Analog, analog_period(self.fps))]
    }
}

impl Default for AnalogState {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}
