// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor lab firmware entry point.
//!
//! Brings up clocks, console, PWM, light sensor and mode buttons, then runs the controller's
//! dispatch loop forever. Interrupt handlers only publish into the inboxes in
//! [`motor_lab::input`]; all motor updates happen on the main loop.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

// Host builds only compile the library.
#[cfg(not(target_os = "none"))]
fn main() {}

#[cfg(target_os = "none")]
mod firmware {
    use core::cell::RefCell;
    use core::fmt::Write;

    use cortex_m::{interrupt::Mutex, peripheral::NVIC};
    use cortex_m_rt::entry;
    use panic_halt as _;

    use hal::{
        gpio::{Edge, Floating, PullUp},
        pac::{self, interrupt, Interrupt, USART3},
        prelude::*,
        serial::{self, Config, Serial},
    };
    use stm32f7xx_hal as hal;

    use motor_lab::config::{ControlConfig, CONSOLE_BAUD};
    use motor_lab::control::MotorController;
    use motor_lab::hw::{
        pins::CDS_CHANNEL, Adc, BoardPins, Button, Led, SysDelay, Tim2Pwm, Usart, UsartRx,
    };
    use motor_lab::input::{BUTTON_INBOX, SERIAL_INBOX};
    use motor_lab::motors::DcMotor;
    use motor_lab::protocol::messages::{TRIGGER_LIGHT, TRIGGER_TIME};

    type LightButton = Button<'C', 13, Floating>;
    type TimeButton = Button<'C', 11, PullUp>;

    static CONSOLE_RX: Mutex<RefCell<Option<UsartRx<USART3>>>> = Mutex::new(RefCell::new(None));
    static BUTTONS: Mutex<RefCell<Option<(LightButton, TimeButton)>>> =
        Mutex::new(RefCell::new(None));

    #[entry]
    fn main() -> ! {
        // Peripherals
        let (Some(dp), Some(cp)) = (pac::Peripherals::take(), cortex_m::Peripherals::take())
        else {
            loop {
                cortex_m::asm::nop();
            }
        };

        // Clocks
        let mut rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();
        let mut syscfg = dp.SYSCFG;
        let mut exti = dp.EXTI;

        // GPIO
        let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD);

        // LED
        let mut run_led = Led::active_high(pins.leds.green);
        let mut fault_led = Led::active_high(pins.leds.red);

        // USART3 (ST-LINK VCP)
        let usart_cfg = Config {
            baud_rate: CONSOLE_BAUD.bps(),
            ..Default::default()
        };
        let mut serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, usart_cfg);
        serial.listen(serial::Event::Rxne);
        let (tx, rx) = serial.split();
        let console = Usart::new(tx);

        // Mode buttons (PC13 and PC11 share EXTI15_10)
        let light = Button::new(
            pins.buttons.light,
            TRIGGER_LIGHT,
            Edge::Rising,
            &mut syscfg,
            &mut exti,
            &mut rcc.apb2,
        );
        let time = Button::new(
            pins.buttons.time,
            TRIGGER_TIME,
            Edge::Falling,
            &mut syscfg,
            &mut exti,
            &mut rcc.apb2,
        );

        // Light sensor
        let sensor = Adc::adc1(dp.ADC1, pins.sensor.cds, CDS_CHANNEL);

        // PWM (TIM2 CH3 forward, CH4 reverse)
        let pwm = Tim2Pwm::new(
            dp.TIM2,
            (pins.motor.forward, pins.motor.reverse),
            clocks.timclk1().raw(),
        );
        let (forward, reverse) = pwm.split();
        let motor = DcMotor::new(forward, reverse);

        let delay = SysDelay::new(cp.SYST, clocks.sysclk().raw());

        let mut controller =
            MotorController::new(motor, sensor, delay, console, ControlConfig::default());

        cortex_m::interrupt::free(|cs| {
            CONSOLE_RX.borrow(cs).replace(Some(UsartRx::new(rx)));
            BUTTONS.borrow(cs).replace(Some((light, time)));
        });
        unsafe {
            NVIC::unmask(Interrupt::USART3);
            NVIC::unmask(Interrupt::EXTI15_10);
        }

        run_led.on();
        if let Err(fault) = controller.start() {
            fault_led.set(true);
            let _ = write!(controller.console(), "Fault: {}\r\n", fault);
        }

        loop {
            let serial = SERIAL_INBOX.take();
            let button = BUTTON_INBOX.take();
            match controller.step(serial, button) {
                Ok(()) => fault_led.set(false),
                Err(fault) => {
                    fault_led.set(true);
                    let _ = write!(controller.console(), "Fault: {}\r\n", fault);
                }
            }
        }
    }

    #[interrupt]
    fn USART3() {
        cortex_m::interrupt::free(|cs| {
            if let Some(rx) = CONSOLE_RX.borrow(cs).borrow_mut().as_mut() {
                rx.on_interrupt(&SERIAL_INBOX);
            }
        });
    }

    #[interrupt]
    fn EXTI15_10() {
        cortex_m::interrupt::free(|cs| {
            if let Some((light, time)) = BUTTONS.borrow(cs).borrow_mut().as_mut() {
                light.poll(&BUTTON_INBOX);
                time.poll(&BUTTON_INBOX);
            }
        });
    }
}
