use bitflags::bitflags;

bitflags! {
    /// Keys held this frame, as sampled by the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyState: u8 {
        const TURN_LEFT     = 0x01;
        const TURN_RIGHT    = 0x02;
        const MOVE_FORWARD  = 0x04;
        const MOVE_BACKWARD = 0x08;
    }
}

/// Per-frame intent derived from [`KeyState`]. Opposing keys cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub turn: f32,    // –1 (left) … +1 (right)
}

impl InputCmd {
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.forward == 0.0 && self.turn == 0.0
    }
}

impl From<KeyState> for InputCmd {
    fn from(keys: KeyState) -> Self {
        let axis = |pos: KeyState, neg: KeyState| {
            keys.contains(pos) as i8 as f32 - keys.contains(neg) as i8 as f32
        };
        Self {
            forward: axis(KeyState::MOVE_FORWARD, KeyState::MOVE_BACKWARD),
            turn: axis(KeyState::TURN_RIGHT, KeyState::TURN_LEFT),
        }
    }
}
