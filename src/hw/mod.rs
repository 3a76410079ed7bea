pub mod adc;
pub mod button;
pub mod delay;
pub mod led;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use adc::Adc;
pub use button::Button;
pub use delay::SysDelay;
pub use led::Led;
pub use pins::BoardPins;
pub use pwm::{PwmChannel, Tim2Pwm};
pub use usart::{Usart, UsartRx};
