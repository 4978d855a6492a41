//! SDL2 window and keyboard backend
//!
//! Nothing touches SDL until the session asks for a video mode. The event
//! source stays empty until then.

use std::cell::RefCell;
use std::rc::Rc;

use pf_input::{EventSource, InputEvent, KeyCode};
use pf_video::{BufferingMode, FrameRing, Surface, VideoDriver, VideoError, VideoMode};
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;

/// Window scale relative to the native 320x240 mode
const WINDOW_SCALE: u32 = 2;

type SharedPump = Rc<RefCell<Option<EventPump>>>;

/// Display driver and event source sharing one SDL context
pub fn backend() -> (SdlVideo, SdlEvents) {
    let pump = SharedPump::default();
    (SdlVideo { pump: pump.clone() }, SdlEvents { pump })
}

pub struct SdlVideo {
    pump: SharedPump,
}

impl VideoDriver for SdlVideo {
    fn set_video_mode(
        &mut self,
        mode: VideoMode,
        buffering: BufferingMode,
    ) -> Result<Box<dyn Surface>, VideoError> {
        let unavailable = |reason: String| VideoError::ModeUnavailable { mode, reason };

        let context = sdl2::init().map_err(VideoError::Backend)?;
        let video = context.video().map_err(VideoError::Backend)?;

        let window = video
            .window(
                "psxfront",
                mode.width as u32 * WINDOW_SCALE,
                mode.height as u32 * WINDOW_SCALE,
            )
            .position_centered()
            .build()
            .map_err(|e| unavailable(e.to_string()))?;

        let mut builder = window.into_canvas().accelerated();
        if buffering != BufferingMode::Single {
            builder = builder.present_vsync();
        }
        let canvas = builder.build().map_err(|e| unavailable(e.to_string()))?;
        let texture = canvas
            .texture_creator()
            .create_texture_streaming(PixelFormatEnum::RGB565, mode.width as u32, mode.height as u32)
            .map_err(|e| unavailable(e.to_string()))?;

        let pump = context.event_pump().map_err(VideoError::Backend)?;
        *self.pump.borrow_mut() = Some(pump);

        tracing::info!("SDL video mode {} ({:?} buffering)", mode, buffering);
        Ok(Box::new(SdlSurface {
            texture,
            canvas,
            ring: FrameRing::new(mode, buffering),
            buffering,
            _context: context,
        }))
    }
}

/// Window surface. Frames are composed in memory and uploaded to one
/// RGB565 streaming texture on every flip.
struct SdlSurface {
    texture: Texture,
    canvas: Canvas<Window>,
    ring: FrameRing,
    buffering: BufferingMode,
    _context: sdl2::Sdl,
}

impl SdlSurface {
    fn present(&mut self) -> Result<(), String> {
        let pitch = self.ring.mode().width * 2;
        let shown = self.ring.advance();

        self.texture
            .update(None, bytemuck::cast_slice(shown), pitch)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&self.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

impl Surface for SdlSurface {
    fn mode(&self) -> VideoMode {
        self.ring.mode()
    }

    fn buffering(&self) -> BufferingMode {
        self.buffering
    }

    fn must_lock(&self) -> bool {
        false
    }

    fn lock(&mut self) {}

    fn unlock(&mut self) {}

    fn flip(&mut self) {
        if let Err(e) = self.present() {
            tracing::warn!("Frame upload failed: {}", e);
        }
    }

    fn with_pixels(&mut self, f: &mut dyn FnMut(&mut [u16])) {
        f(self.ring.back_mut());
    }
}

pub struct SdlEvents {
    pump: SharedPump,
}

impl EventSource for SdlEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        let mut pump = self.pump.borrow_mut();
        let pump = pump.as_mut()?;

        loop {
            let event = match pump.poll_event()? {
                Event::Quit { .. } => InputEvent::Quit,
                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => match key_code(scancode) {
                    Some(key) => InputEvent::KeyDown(key),
                    None => continue,
                },
                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => match key_code(scancode) {
                    Some(key) => InputEvent::KeyUp(key),
                    None => continue,
                },
                _ => continue,
            };
            return Some(event);
        }
    }

    fn is_key_down(&self, key: KeyCode) -> bool {
        let Some(scancode) = Scancode::from_i32(i32::from(key.usage())) else {
            return false;
        };
        self.pump
            .borrow()
            .as_ref()
            .is_some_and(|pump| pump.keyboard_state().is_scancode_pressed(scancode))
    }
}

/// SDL scancodes are USB HID usage codes
fn key_code(scancode: Scancode) -> Option<KeyCode> {
    u16::try_from(scancode as i32)
        .ok()
        .and_then(KeyCode::from_usage)
}
