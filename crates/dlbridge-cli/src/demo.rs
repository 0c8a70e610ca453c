//! Sample scenarios driven against the mock hosts.
//!
//! Each scenario exercises one facade the way an application page would and
//! returns the status lines it produced. A missing host is reported as an
//! `ERROR:` line instead of aborting the run.

use clap::ValueEnum;
use dlbridge_core::catalog::{InsertState, LedAction, LockAction, SendCodeId};
use dlbridge_core::{PropertyId, PropertyValue, SymbologyId};
use dlbridge_hardware::mock::MockHosts;
use dlbridge_hardware::{BarcodeManager, CradleManager, Environment, KeyboardManager};
use dlbridge_protocol::{CradleState, ScanResult};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Register scan and timeout listeners and simulate a read.
    Scan,
    /// Configure Code 39 and read the properties back.
    Config,
    /// Follow the cradle and trolley insertion events.
    Listeners,
    /// Cycle through every cradle LED action.
    Led,
    /// Cycle through every cradle lock action.
    Lock,
    /// Write and read the cradle custom area.
    CustomArea,
    /// Disable and re-enable the scan triggers.
    Trigger,
}

impl Scenario {
    pub fn name(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Config => "config",
            Self::Listeners => "listeners",
            Self::Led => "led",
            Self::Lock => "lock",
            Self::CustomArea => "custom-area",
            Self::Trigger => "trigger",
        }
    }
}

/// Shared sink for status lines written from event callbacks.
#[derive(Clone, Default)]
struct Lines(Rc<RefCell<Vec<String>>>);

impl Lines {
    fn push(&self, line: impl Into<String>) {
        self.0.borrow_mut().push(line.into());
    }

    fn take(&self) -> Vec<String> {
        self.0.take()
    }
}

/// Run `scenario` and collect its status lines.
pub fn run(scenario: Scenario, env: &Environment, hosts: &MockHosts) -> anyhow::Result<Vec<String>> {
    let lines = Lines::default();

    let outcome = match scenario {
        Scenario::Scan => scan(env, hosts, &lines),
        Scenario::Config => config(env, &lines),
        Scenario::Listeners => listeners(env, hosts, &lines),
        Scenario::Led => led(env, &lines),
        Scenario::Lock => lock(env, &lines),
        Scenario::CustomArea => custom_area(env, &lines),
        Scenario::Trigger => trigger(env, &lines),
    };

    match outcome {
        Ok(()) => Ok(lines.take()),
        Err(e) if e.is_host_not_injected() => {
            lines.push(format!("ERROR: {e}"));
            Ok(lines.take())
        }
        Err(e) => Err(e.into()),
    }
}

fn status(ok: bool) -> &'static str {
    if ok { "ok" } else { "failed" }
}

fn scan(env: &Environment, hosts: &MockHosts, lines: &Lines) -> dlbridge_core::Result<()> {
    let barcode = BarcodeManager::new(env);

    let sink = lines.clone();
    barcode.on_scan(move |scan| {
        let name = scan.id.name().unwrap_or("UNKNOWN");
        sink.push(format!("scan: {name} ({} bytes) {}", scan.raw_data.len(), scan.text));
    })?;
    let sink = lines.clone();
    barcode.on_timeout(move |_| sink.push("timeout: no label read"))?;

    let started = barcode.start_decode(None)?;
    lines.push(format!("start_decode: {}", status(started)));
    hosts
        .barcode
        .simulate_scan(ScanResult::new(SymbologyId::QRCODE, "https://www.datalogic.com"));
    env.events().dispatch_pending();

    let started = barcode.start_decode(Some(1000))?;
    lines.push(format!("start_decode(1000): {}", status(started)));
    hosts.barcode.simulate_timeout();
    env.events().dispatch_pending();

    barcode.ignore_scan()?;
    barcode.ignore_timeout()?;
    Ok(())
}

fn config(env: &Environment, lines: &Lines) -> dlbridge_core::Result<()> {
    let barcode = BarcodeManager::new(env);

    let enabled = barcode.set_property(PropertyId::CODE39_ENABLE, true)?;
    lines.push(format!("CODE39_ENABLE: {}", status(enabled)));

    let ids = [
        PropertyId::CODE39_LENGTH1,
        PropertyId::CODE39_LENGTH2,
        PropertyId::CODE39_USER_ID,
        PropertyId::LABEL_PREFIX,
        PropertyId::SEND_CODE_ID,
    ];
    let values = [
        PropertyValue::from(1),
        PropertyValue::from(20),
        PropertyValue::from('C'),
        PropertyValue::from("> "),
        PropertyValue::from(SendCodeId::UserdefinedIdentifierBeforeLabel),
    ];
    let stored = barcode.set_properties(&ids, &values)?;
    lines.push(format!("set_properties: {}", status(stored)));

    let committed = barcode.commit_properties()?;
    lines.push(format!("commit_properties: {}", status(committed)));

    for (name, id) in [("CODE39_ENABLE", PropertyId::CODE39_ENABLE)]
        .into_iter()
        .chain(ids.iter().map(|id| (id.name().unwrap_or("?"), *id)))
    {
        lines.push(format!("{name} = {}", barcode.get_property(id)?));
    }

    let restored = barcode.set_defaults()?;
    lines.push(format!("set_defaults: {}", status(restored)));
    Ok(())
}

fn listeners(env: &Environment, hosts: &MockHosts, lines: &Lines) -> dlbridge_core::Result<()> {
    let cradle = CradleManager::new(env);

    let describe = |label: &'static str| {
        let sink = lines.clone();
        move |state: CradleState| {
            let description = state.insert_state().map_or("Unknown", InsertState::description);
            sink.push(format!("{label}: {description}"));
        }
    };
    cradle.on_cradle_insertion(describe("cradle insertion"))?;
    cradle.on_cradle_extraction(describe("cradle extraction"))?;
    cradle.on_trolley_insertion(describe("trolley insertion"))?;
    cradle.on_trolley_extraction(describe("trolley extraction"))?;

    hosts.cradle.set_slot_index(1);
    hosts.cradle.simulate_insertion(InsertState::InsertedCorrectly);
    env.events().dispatch_pending();
    lines.push(format!(
        "insertion state: {}, slot {}",
        cradle.get_insertion_state()?.description(),
        cradle.get_slot_index()?
    ));

    hosts.cradle.simulate_extraction();
    hosts.cradle.simulate_trolley_insertion(InsertState::InsertedCorrectly);
    env.events().dispatch_pending();
    lines.push(format!("in trolley: {}", cradle.is_device_in_trolley()?));

    hosts.cradle.simulate_trolley_extraction();
    let delivered = env.events().dispatch_pending();
    debug!("Delivered {} trailing event(s)", delivered);

    cradle.ignore_cradle_insertion()?;
    cradle.ignore_cradle_extraction()?;
    cradle.ignore_trolley_insertion()?;
    cradle.ignore_trolley_extraction()?;
    Ok(())
}

fn led(env: &Environment, lines: &Lines) -> dlbridge_core::Result<()> {
    let cradle = CradleManager::new(env);
    for action in LedAction::ALL {
        let ok = cradle.control_led(*action)?;
        lines.push(format!("LED {action}: {}", status(ok)));
    }
    Ok(())
}

fn lock(env: &Environment, lines: &Lines) -> dlbridge_core::Result<()> {
    let cradle = CradleManager::new(env);
    for action in LockAction::ALL {
        let ok = cradle.control_lock(*action)?;
        lines.push(format!("{action}: {}", status(ok)));
    }
    Ok(())
}

fn custom_area(env: &Environment, lines: &Lines) -> dlbridge_core::Result<()> {
    let cradle = CradleManager::new(env);

    let written = cradle.write_custom_area("dlbridge demo")?;
    lines.push(format!("write: {}", status(written)));
    match cradle.read_custom_area()? {
        Some(content) => lines.push(format!("read: {content:?}")),
        None => lines.push("read: failed"),
    }

    let oversized = "x".repeat(cradle.config().custom_area_limit + 1);
    let written = cradle.write_custom_area(&oversized)?;
    lines.push(format!("write {} chars: {}", oversized.len(), status(written)));
    Ok(())
}

fn trigger(env: &Environment, lines: &Lines) -> dlbridge_core::Result<()> {
    let keyboard = KeyboardManager::new(env);
    for enable in [false, true] {
        let ok = keyboard.enable_triggers(enable)?;
        let verb = if enable { "enable" } else { "disable" };
        lines.push(format!("{verb} triggers: {}", status(ok)));
    }
    Ok(())
}
