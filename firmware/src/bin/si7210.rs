//! Reads the Silicon Labs SI7210 hall sensor every half second.
//!
//! Hold the user button to run a continuous-mode noise capture instead.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod app {
    use defmt::*;
    use embassy_executor::Spawner;
    use embassy_stm32::gpio::{Input, Pull};
    use embassy_stm32::i2c::I2c;
    use embassy_stm32::mode::Blocking;
    use embassy_stm32::time::Hertz;
    use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
    use embassy_sync::channel::Channel;
    use embassy_time::{Duration, Instant, Timer};
    use {defmt_rtt as _, panic_probe as _};

    use firmware::si7210::{Bus, Error, HalBus, Measurement, Si7210};
    use firmware::stats::{SampleWindow, Stats};

    // SI7210-B-00 on the breakout: base address 0x30
    const ADDRESS_SELECTOR: u8 = 0;
    const I2C_FREQUENCY: Hertz = Hertz(100_000);
    const READ_INTERVAL: Duration = Duration::from_millis(500);
    const CAPTURE_WINDOW: usize = 600;

    enum SensorMessage {
        Reading(Measurement),
        Capture { stats: Stats, sample_rate: f32 },
    }

    static SENSOR_CHANNEL: Channel<ThreadModeRawMutex, SensorMessage, 2> = Channel::new();

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Hello SI7210!");
        let p = embassy_stm32::init(Default::default());

        let button = Input::new(p.PA0, Pull::Down);
        let i2c = I2c::new_blocking(p.I2C3, p.PA8, p.PC9, I2C_FREQUENCY, Default::default());

        unwrap!(spawner.spawn(sensor_task(i2c, button)));

        loop {
            match SENSOR_CHANNEL.receive().await {
                SensorMessage::Reading(m) => info!(
                    "Mag T: {}  temp C/F: {}/{}",
                    m.flux_density,
                    m.temperature,
                    m.fahrenheit()
                ),
                SensorMessage::Capture { stats, sample_rate } => info!(
                    "{} samples at {} Hz: mean {} std dev {} rms {}",
                    stats.count,
                    sample_rate,
                    stats.mean,
                    stats.std_dev,
                    stats.rms
                ),
            }
        }
    }

    #[embassy_executor::task]
    async fn sensor_task(i2c: I2c<'static, Blocking>, button: Input<'static>) {
        let mut bus = HalBus::new(i2c);
        let mut sensor = Si7210::new(&mut bus, ADDRESS_SELECTOR);

        match sensor.revision() {
            Ok(rev) => info!("SI7210 at {:#x}, revision {:#x}", sensor.address(), rev),
            Err(e) => error!("SI7210 not responding: {}", e),
        }

        loop {
            if button.is_high() {
                capture(&mut sensor).await;
                continue;
            }

            match one_shot(&mut sensor) {
                Ok(m) => SENSOR_CHANNEL.send(SensorMessage::Reading(m)).await,
                Err(Error::StaleSample) => warn!("SI7210 sample not fresh, skipping"),
                Err(e) => error!("SI7210 read failed: {}", e),
            }
            Timer::after(READ_INTERVAL).await;
        }
    }

    /// Wake, measure, sleep.
    fn one_shot<B: Bus>(sensor: &mut Si7210<B>) -> Result<Measurement, Error<B::Error>> {
        sensor.enable()?;
        let measurement = sensor.read()?;
        sensor.disable()?;
        Ok(measurement)
    }

    async fn capture<B>(sensor: &mut Si7210<B>)
    where
        B: Bus,
        B::Error: Format,
    {
        if let Err(e) = sensor.start_continuous() {
            error!("continuous mode failed: {}", e);
            return;
        }

        let mut window = SampleWindow::<CAPTURE_WINDOW>::new();
        let start = Instant::now();
        while !window.is_full() {
            match sensor.read_field() {
                Ok(raw) => {
                    let _ = window.push(raw.code());
                }
                Err(e) => {
                    error!("field read failed: {}", e);
                    break;
                }
            }
        }
        let elapsed = start.elapsed().as_micros().max(1);

        if let Some(stats) = window.stats() {
            let sample_rate = stats.count as f32 * 1_000_000.0 / elapsed as f32;
            SENSOR_CHANNEL
                .send(SensorMessage::Capture { stats, sample_rate })
                .await;
        }

        if let Err(e) = sensor.disable() {
            error!("SI7210 sleep failed: {}", e);
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
