// Bridge Pattern - shapes (abstraction) hold a drawing API (implementor).
// New shapes and new colors are added independently; every pairing works.

// ============================================================================
// Implementor
// ============================================================================

pub trait DrawApi {
    fn draw_circle(&self, radius: u32, x: i32, y: i32) -> String;
    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String;
}

/// Shared by the concrete implementors, which only differ by color.
fn circle_line(color: &str, radius: u32, x: i32, y: i32) -> String {
    format!("Drawing Circle[ color: {}, radius: {}, x: {}, {}]", color, radius, x, y)
}

fn rectangle_line(color: &str, x: i32, y: i32, width: u32, height: u32) -> String {
    format!(
        "Drawing Rectangle[ color: {}, width: {}, height: {}, x: {}, {}]",
        color, width, height, x, y
    )
}

pub struct RedInk;

impl DrawApi for RedInk {
    fn draw_circle(&self, radius: u32, x: i32, y: i32) -> String {
        circle_line("red", radius, x, y)
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        rectangle_line("red", x, y, width, height)
    }
}

pub struct GreenInk;

impl DrawApi for GreenInk {
    fn draw_circle(&self, radius: u32, x: i32, y: i32) -> String {
        circle_line("green", radius, x, y)
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        rectangle_line("green", x, y, width, height)
    }
}

pub struct BlueInk;

impl DrawApi for BlueInk {
    fn draw_circle(&self, radius: u32, x: i32, y: i32) -> String {
        circle_line("blue", radius, x, y)
    }

    fn draw_rectangle(&self, x: i32, y: i32, width: u32, height: u32) -> String {
        rectangle_line("blue", x, y, width, height)
    }
}

// ============================================================================
// Abstraction
// ============================================================================

pub trait Shape {
    fn draw(&self) -> String;
}

pub struct Circle {
    x: i32,
    y: i32,
    radius: u32,
    draw_api: Box<dyn DrawApi>,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32, draw_api: Box<dyn DrawApi>) -> Self {
        Self {
            x,
            y,
            radius,
            draw_api,
        }
    }
}

impl Shape for Circle {
    fn draw(&self) -> String {
        self.draw_api.draw_circle(self.radius, self.x, self.y)
    }
}

pub struct Rectangle {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    draw_api: Box<dyn DrawApi>,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u32, height: u32, draw_api: Box<dyn DrawApi>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            draw_api,
        }
    }
}

impl Shape for Rectangle {
    fn draw(&self) -> String {
        self.draw_api.draw_rectangle(self.x, self.y, self.width, self.height)
    }
}

/// Draws the red and green circles, then a rectangle in each color.
pub fn demo() -> Vec<String> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(100, 100, 10, Box::new(RedInk))),
        Box::new(Circle::new(100, 100, 10, Box::new(GreenInk))),
        Box::new(Rectangle::new(0, 0, 40, 20, Box::new(BlueInk))),
        Box::new(Rectangle::new(5, 5, 10, 10, Box::new(RedInk))),
    ];

    shapes
        .iter()
        .map(|shape| {
            let line = shape.draw();
            println!("{}", line);
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_circle() {
        let circle = Circle::new(100, 100, 10, Box::new(RedInk));
        assert_eq!(circle.draw(), "Drawing Circle[ color: red, radius: 10, x: 100, 100]");
    }

    #[test]
    fn test_green_circle_differs_from_red() {
        let red = Circle::new(100, 100, 10, Box::new(RedInk)).draw();
        let green = Circle::new(100, 100, 10, Box::new(GreenInk)).draw();
        assert_ne!(red, green);
        assert!(green.contains("color: green"));
        assert!(green.contains("radius: 10"));
        assert!(green.contains("x: 100, 100"));
    }

    #[test]
    fn test_coordinates_come_from_shape() {
        let circle = Circle::new(-3, 7, 2, Box::new(BlueInk));
        assert_eq!(circle.draw(), "Drawing Circle[ color: blue, radius: 2, x: -3, 7]");
    }

    #[test]
    fn test_rectangle_uses_same_implementor() {
        let rect = Rectangle::new(1, 2, 30, 40, Box::new(GreenInk));
        assert_eq!(
            rect.draw(),
            "Drawing Rectangle[ color: green, width: 30, height: 40, x: 1, 2]"
        );
    }

    #[test]
    fn test_any_ink_draws_any_shape() {
        let rect = Rectangle::new(5, 5, 10, 10, Box::new(RedInk));
        assert_eq!(
            rect.draw(),
            "Drawing Rectangle[ color: red, width: 10, height: 10, x: 5, 5]"
        );
    }

    #[test]
    fn test_demo_lines_are_distinct() {
        let lines = demo();
        assert_eq!(lines.len(), 4);
        assert_ne!(lines[0], lines[1]);
    }
}
