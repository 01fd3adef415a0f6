#![allow(dead_code)]

use anyhow::ensure;
use derive_more::From;
use revhist::{Assign, Attribute, Command, Property, Result, Switch};

#[derive(Debug)]
pub enum Power {}

impl Property for Power {
    type Value = bool;
    const NAME: &'static str = "power";
}

#[derive(Debug)]
pub enum Speed {}

impl Property for Speed {
    type Value = i32;
    const NAME: &'static str = "speed";
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Fan {
    on: bool,
    speed: i32,
    /// While set, every write is rejected as if the motor controller refused it.
    pub jammed: bool,
}

impl Fan {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn state(&self) -> (bool, i32) {
        (self.on, self.speed)
    }
}

impl Attribute<Power> for Fan {
    fn get(&self) -> anyhow::Result<bool> {
        Ok(self.on)
    }

    fn set(&mut self, on: bool) -> anyhow::Result<()> {
        ensure!(!self.jammed, "fan controller rejected power change");
        self.on = on;
        Ok(())
    }
}

impl Attribute<Speed> for Fan {
    fn get(&self) -> anyhow::Result<i32> {
        Ok(self.speed)
    }

    fn set(&mut self, speed: i32) -> anyhow::Result<()> {
        ensure!(!self.jammed, "fan controller rejected speed {}", speed);
        self.speed = speed;
        Ok(())
    }
}

#[derive(Debug, From)]
pub enum FanCommand {
    Switch(Switch<Power>),
    Set(Assign<Speed>),
}

impl FanCommand {
    pub fn on() -> Self {
        Switch::<Power>::on().into()
    }

    pub fn off() -> Self {
        Switch::<Power>::off().into()
    }

    pub fn speed(speed: i32) -> Self {
        Assign::<Speed>::new(speed).into()
    }
}

impl Command<Fan> for FanCommand {
    fn execute(&mut self, fan: &mut Fan) -> Result<()> {
        match self {
            FanCommand::Switch(com) => com.execute(fan),
            FanCommand::Set(com) => com.execute(fan),
        }
    }

    fn undo(&mut self, fan: &mut Fan) -> Result<()> {
        match self {
            FanCommand::Switch(com) => com.undo(fan),
            FanCommand::Set(com) => com.undo(fan),
        }
    }

    fn redo(&mut self, fan: &mut Fan) -> Result<()> {
        match self {
            FanCommand::Switch(com) => com.redo(fan),
            FanCommand::Set(com) => com.redo(fan),
        }
    }

    fn name(&self) -> String {
        match self {
            FanCommand::Switch(com) => Command::<Fan>::name(com),
            FanCommand::Set(com) => Command::<Fan>::name(com),
        }
    }
}
