/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */

/* COM settings test/example client
 * Also useful for inspecting templates a workspace already carries.
 *
 * USAGE: ./hpecom -r us-west -T $HPECOM_TOKEN -c list
 * -r: COM region code, e.g. us-west or eu-central.
 * -T: GreenLake bearer token. Falls back to the HPECOM_TOKEN env var.
 * Run with no params for help.
 * Run with `-v` for more output.
 */

use anyhow::anyhow;
use libhpecom::model::bios::BiosAttributes;
use libhpecom::model::ilo::{IloDefault, NetworkProtocol, ProtocolSetting};
use libhpecom::{
    BiosTemplate, BiosUpdate, ComClientPool, ComSettings, EnabledDisabled, IloUpdate,
    SettingCategory,
};
use tracing::{error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();

    opts.optflag("h", "help", "Print this help");
    opts.optflag("v", "verbose", "Log at DEBUG level. Default is INFO");
    opts.optopt("r", "region", "Required. COM region code", "REGION");
    opts.optopt(
        "R",
        "regions",
        "Comma-separated provisioned regions. Defaults to the -r region",
        "REGIONS",
    );
    opts.optopt(
        "T",
        "token",
        "GreenLake bearer token. Defaults to $HPECOM_TOKEN",
        "TOKEN",
    );
    opts.optopt("n", "name", "Setting name for get/delete/create/set", "NAME");
    opts.optopt("w", "workload-profile", "BIOS workload profile", "PROFILE");
    opts.optopt(
        "c",
        "cmd",
        "Command to run:
                list
                list_bios
                list_firmware
                list_os
                list_storage
                list_ilo
                get
                delete
                create_bios
                set_bios
                ilo_disable_ipmi",
        "CMD",
    );

    let args_given = opts.parse(&args[1..])?;
    if args_given.opt_present("h") || !args_given.opt_present("r") {
        eprintln!("{}", opts.usage("hpecom -r region [-T token] -c cmd"));
        return Ok(());
    }

    let log_level = if args_given.opt_present("v") {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(log_level.into())
        .add_directive("hyper=warn".parse()?);
    tracing_subscriber::registry()
        .with(Layer::default().compact())
        .with(env_filter)
        .init();

    let region = args_given
        .opt_str("r")
        .ok_or_else(|| anyhow!("-r region is required"))?;
    let token = match args_given.opt_str("T") {
        Some(t) => t,
        None => std::env::var("HPECOM_TOKEN")
            .map_err(|_| anyhow!("pass -T or set the HPECOM_TOKEN env var"))?,
    };
    let provisioned: Vec<String> = match args_given.opt_str("R") {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => vec![region.clone()],
    };

    let pool = ComClientPool::builder()
        .token(token)
        .provisioned_regions(provisioned)
        .build()?;
    let com = pool.client(&region)?;

    let name = args_given.opt_str("n");
    let need_name = || {
        name.clone()
            .ok_or_else(|| anyhow!("this command needs -n name"))
    };

    if let Some(cmd) = args_given.opt_str("c") {
        match cmd.as_str() {
            "list" => list(com.as_ref(), None).await?,
            "list_bios" => list(com.as_ref(), Some(SettingCategory::Bios)).await?,
            "list_firmware" => list(com.as_ref(), Some(SettingCategory::Firmware)).await?,
            "list_os" => list(com.as_ref(), Some(SettingCategory::Os)).await?,
            "list_storage" => list(com.as_ref(), Some(SettingCategory::Storage)).await?,
            "list_ilo" => list(com.as_ref(), Some(SettingCategory::IloSettings)).await?,
            "get" => {
                let setting = com.get_setting(&need_name()?).await?;
                info!("{}", serde_json::to_string_pretty(&setting)?);
            }
            "delete" => {
                info!("{}", com.delete_setting(&need_name()?).await?);
            }
            "create_bios" => {
                let mut template = BiosTemplate::new(need_name()?);
                template.attributes = BiosAttributes {
                    workload_profile: args_given.opt_str("w"),
                    ..Default::default()
                };
                info!("{}", com.new_bios_setting(template).await?);
            }
            "set_bios" => {
                let update = BiosUpdate {
                    description: None,
                    attributes: BiosAttributes {
                        workload_profile: args_given.opt_str("w"),
                        ..Default::default()
                    },
                };
                info!("{}", com.set_bios_setting(&need_name()?, update).await?);
            }
            "ilo_disable_ipmi" => {
                let update = IloUpdate {
                    description: None,
                    settings: IloDefault {
                        network_protocol: Some(NetworkProtocol {
                            ipmi: Some(ProtocolSetting::state(EnabledDisabled::Disabled)),
                            ..Default::default()
                        }),
                        account_service: None,
                    },
                };
                info!("{}", com.set_ilo_setting(&need_name()?, update).await?);
            }
            unknown => {
                error!("Unknown command {unknown}");
                return Err(anyhow!("unknown command {unknown}"));
            }
        }
    }

    Ok(())
}

async fn list(
    com: &dyn ComSettings,
    category: Option<SettingCategory>,
) -> Result<(), anyhow::Error> {
    let settings = com.get_settings(category).await?;
    for setting in &settings {
        info!(
            "{} [{}] {}",
            setting.name,
            setting.category,
            setting.description.as_deref().unwrap_or_default()
        );
    }
    info!("{} settings", settings.len());
    Ok(())
}
