//! Token set shared by the unit tests

#![allow(dead_code)]

use std::num::ParseIntError;

use inverse_domain::{Token, TokenSet};

pub struct Services;
impl TokenSet for Services {}

pub trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

pub struct English;

impl Greeter for English {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

pub struct French;

impl Greeter for French {
    fn greet(&self) -> String {
        "bonjour".to_string()
    }
}

#[derive(Debug, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, PartialEq)]
pub struct Port(pub u16);

impl Port {
    pub fn parse(raw: String) -> Result<Box<Self>, ParseIntError> {
        Ok(Box::new(Self(raw.parse()?)))
    }
}

pub struct GreeterToken;

impl Token for GreeterToken {
    type Set = Services;
    type Service = dyn Greeter;
    type Args = ();
    const NAME: &'static str = "greeter";
}

pub struct PointToken;

impl Token for PointToken {
    type Set = Services;
    type Service = Point;
    type Args = (i32, i32);
    const NAME: &'static str = "point";
}

pub struct PortToken;

impl Token for PortToken {
    type Set = Services;
    type Service = Port;
    type Args = String;
    const NAME: &'static str = "port";
}

pub fn english() -> std::sync::Arc<dyn Greeter> {
    std::sync::Arc::new(English)
}

pub fn french() -> std::sync::Arc<dyn Greeter> {
    std::sync::Arc::new(French)
}

pub fn point(args: (i32, i32)) -> Box<Point> {
    let (x, y) = args;
    Box::new(Point { x, y })
}
