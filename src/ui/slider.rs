use macroquad::prelude::*;

/// Horizontal slider mapping a position on the track to a value in
/// [min, max]. A drag started on the track keeps following the cursor
/// until the button is released, even outside the track.
pub struct Slider {
    rect: Rect,
    label: String,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        min: f32,
        max: f32,
        initial: f32,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, 16.0),
            label: label.into(),
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Handle mouse interaction; returns the new value when it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<f32> {
        if is_mouse_button_pressed(MouseButton::Left)
            && self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
        {
            self.dragging = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let t = ((mouse_pos.0 - self.rect.x) / self.rect.w).clamp(0.0, 1.0);
        let value = (self.min + t * (self.max - self.min)).round();
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    /// Draw label, track, filled portion and knob
    pub fn draw(&self) {
        draw_text(
            &format!("{}: {:.0} ms", self.label, self.value),
            self.rect.x,
            self.rect.y - 8.0,
            18.0,
            WHITE,
        );

        let track_y = self.rect.y + self.rect.h / 2.0 - 2.0;
        draw_rectangle(
            self.rect.x,
            track_y,
            self.rect.w,
            4.0,
            Color::from_rgba(70, 70, 70, 255),
        );

        let t = (self.value - self.min) / (self.max - self.min);
        let knob_x = self.rect.x + t * self.rect.w;
        draw_rectangle(
            self.rect.x,
            track_y,
            knob_x - self.rect.x,
            4.0,
            Color::from_rgba(70, 130, 180, 255),
        );
        draw_circle(
            knob_x,
            self.rect.y + self.rect.h / 2.0,
            7.0,
            Color::from_rgba(100, 149, 237, 255),
        );
    }
}
