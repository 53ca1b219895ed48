#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use quantity_converter_toolbox::{
    config, conversion,
    converter::QuantityConverter,
    converters, i18n,
    quantity::{AnyUnit, PhysicalQuantity, QuantityValue},
    units::LengthUnit,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_transparent(true);
    if let Some(icon) = icon_data.clone() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Quantity Converter Toolbox",
        cfg,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 기본 폰트를 우선 적용한다.
/// 1) assets/fonts/ 안의 폰트
/// 2) Windows/Linux 시스템 폰트(맑은 고딕/Noto 계열)
/// 3) 모두 실패 시 Err를 반환해 사용자 지정 폰트 로드를 유도한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    for cand in ["assets/fonts/malgun.ttf", "assets/fonts/NotoSansKR-Regular.ttf"] {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 2) 시스템 폰트 탐색 (Windows)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 2') 시스템 폰트 탐색 (Linux)
    let linux_candidates = [
        "/usr/share/fonts/truetype/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    // 3) 실패: 기본 폰트 유지, 사용자 지정 안내
    Err("Font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

/// 단위 선택 콤보박스. 기호를 그대로 표기한다.
fn unit_combo(ui: &mut egui::Ui, value: &mut AnyUnit, options: &[AnyUnit]) {
    egui::ComboBox::from_id_source(ui.next_auto_id())
        .selected_text(value.symbol())
        .show_ui(ui, |ui| {
            for unit in options {
                ui.selectable_value(value, *unit, unit.symbol());
            }
        });
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    lang_pack_dir_input: String,
    lang_save_status: Option<String>,
    tab: Tab,
    window_alpha: f32,
    // 단위 변환
    conv_kind: PhysicalQuantity,
    conv_value: f64,
    conv_from: AnyUnit,
    conv_to: AnyUnit,
    conv_result: Option<String>,
    // 변환 카탈로그
    cat_quantity: PhysicalQuantity,
    cat_list: Vec<QuantityConverter>,
    cat_index: usize,
    cat_left_value: f64,
    cat_left_unit: AnyUnit,
    cat_right_value: f64,
    cat_right_unit: Option<AnyUnit>,
    cat_result: Option<String>,
    // 설정
    font_size_note: Option<String>,
    ui_scale: f32,
    always_on_top: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    custom_font_path: String,
    font_load_error: Option<String>,
    apply_initial_view_size: bool,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    UnitConv,
    Catalog,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        let lang_pack_dir_input = config.language_pack_dir.clone().unwrap_or_default();
        let cat_quantity = PhysicalQuantity::Length;
        let cat_list = converters::converters_for(cat_quantity);
        let cat_right_unit = cat_list
            .first()
            .and_then(|c| c.operand())
            .map(|(_, q)| config.default_units.unit_for(q));
        Self {
            tr,
            lang_input,
            lang_pack_dir_input,
            lang_save_status: None,
            tab: Tab::UnitConv,
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            conv_kind: PhysicalQuantity::Length,
            conv_value: 1.0,
            conv_from: config.default_units.unit_for(PhysicalQuantity::Length),
            conv_to: AnyUnit::Length(LengthUnit::Foot),
            conv_result: None,
            cat_quantity,
            cat_list,
            cat_index: 0,
            cat_left_value: 1.0,
            cat_left_unit: config.default_units.unit_for(cat_quantity),
            cat_right_value: 1.0,
            cat_right_unit,
            cat_result: None,
            font_size_note: None,
            ui_scale: 1.0,
            always_on_top: false,
            show_settings_modal: false,
            show_help_modal: false,
            custom_font_path: String::new(),
            font_load_error: None,
            apply_initial_view_size: true,
            config,
        }
    }

    /// 카탈로그 탭의 출발 물리량이 바뀌면 목록과 기본 단위를 다시 만든다.
    fn reset_catalog(&mut self) {
        self.cat_list = converters::converters_for(self.cat_quantity);
        self.cat_index = 0;
        self.cat_left_unit = self.config.default_units.unit_for(self.cat_quantity);
        self.cat_right_unit = self
            .cat_list
            .first()
            .and_then(|c| c.operand())
            .map(|(_, q)| self.config.default_units.unit_for(q));
        self.cat_result = None;
    }

    fn quantity_label(&self, quantity: PhysicalQuantity) -> String {
        self.tr
            .lookup(i18n::quantity_key(quantity))
            .unwrap_or_else(|| quantity.name().to_string())
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::UnitConv, txt("gui.tab.unit_conv", "Unit Converter")),
            (Tab::Catalog, txt("gui.tab.catalog", "Converter Catalog")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.unit.heading", "Unit Converter"),
            &txt(
                "gui.unit.tip",
                "Convert a value of one quantity between its units.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    label_with_tip(
                        ui,
                        &txt("gui.unit.quantity.label", "Quantity"),
                        &txt("gui.unit.quantity_tip", "Select the quantity type"),
                    );
                    let before = self.conv_kind;
                    egui::ComboBox::from_id_source("conv_kind")
                        .selected_text(self.quantity_label(self.conv_kind))
                        .show_ui(ui, |ui| {
                            for q in PhysicalQuantity::ALL {
                                let label = self.quantity_label(q);
                                ui.selectable_value(&mut self.conv_kind, q, label);
                            }
                        });
                    if before != self.conv_kind {
                        let units = self.conv_kind.units();
                        self.conv_from = self.config.default_units.unit_for(self.conv_kind);
                        self.conv_to = *units.last().unwrap_or(&self.conv_from);
                        self.conv_result = None;
                    }
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.unit.value", "Value"),
                        &txt("gui.unit.value_tip", "Enter the value to convert"),
                    );
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.unit.from", "From unit"),
                        &txt("gui.unit.from_tip", "Current unit of the value"),
                    );
                    unit_combo(ui, &mut self.conv_from, &self.conv_kind.units());
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &txt("gui.unit.to", "To unit"),
                        &txt("gui.unit.to_tip", "Unit to convert into"),
                    );
                    unit_combo(ui, &mut self.conv_to, &self.conv_kind.units());
                    ui.end_row();
                });
            ui.add_space(4.0);
            if ui.button(txt("gui.unit.run", "Convert")).clicked() {
                let input = QuantityValue::new(self.conv_value, self.conv_from);
                self.conv_result = Some(match conversion::convert_to_unit(&input, self.conv_to) {
                    Ok(out) => format!("{input} = {out}"),
                    Err(e) => format!("{}: {e}", txt("gui.common.error", "Error")),
                });
            }
            if let Some(result) = &self.conv_result {
                ui.add_space(4.0);
                ui.strong(result);
            }
        });
    }

    fn ui_catalog(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.catalog.heading", "Converter Catalog"),
            &txt(
                "gui.catalog.tip",
                "Turn a value of one quantity into another quantity.",
            ),
        );
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                label_with_tip(
                    ui,
                    &txt("gui.catalog.source", "Source quantity"),
                    &txt("gui.catalog.source_tip", "Quantity the value starts from"),
                );
                let before = self.cat_quantity;
                egui::ComboBox::from_id_source("cat_quantity")
                    .selected_text(self.quantity_label(self.cat_quantity))
                    .show_ui(ui, |ui| {
                        for q in PhysicalQuantity::ALL {
                            let label = self.quantity_label(q);
                            ui.selectable_value(&mut self.cat_quantity, q, label);
                        }
                    });
                if before != self.cat_quantity {
                    self.reset_catalog();
                }
            });

            if self.cat_list.is_empty() {
                ui.add_space(8.0);
                ui.label(txt(
                    "gui.catalog.empty",
                    "No conversions start from this quantity.",
                ));
                return;
            }

            ui.add_space(4.0);
            ui.label(txt("gui.catalog.convert_to", "Convert to"));
            let before_index = self.cat_index;
            egui::ComboBox::from_id_source("cat_converter")
                .width(320.0)
                .selected_text(self.cat_list[self.cat_index].name().to_string())
                .show_ui(ui, |ui| {
                    for (i, c) in self.cat_list.iter().enumerate() {
                        ui.selectable_value(&mut self.cat_index, i, c.name());
                    }
                });
            if before_index != self.cat_index {
                self.cat_right_unit = self.cat_list[self.cat_index]
                    .operand()
                    .map(|(_, q)| self.config.default_units.unit_for(q));
                self.cat_result = None;
            }

            let converter = self.cat_list[self.cat_index].clone();
            let operand = converter.operand();

            ui.add_space(4.0);
            egui::Grid::new("cat_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.quantity_label(converter.source()));
                    ui.add(egui::DragValue::new(&mut self.cat_left_value).speed(1.0));
                    unit_combo(ui, &mut self.cat_left_unit, &converter.source().units());
                    ui.end_row();

                    if let Some((op, right_quantity)) = operand {
                        let right_label =
                            format!("{} {}", op.symbol(), self.quantity_label(right_quantity));
                        if let Some(right_unit) = self.cat_right_unit.as_mut() {
                            ui.label(right_label);
                            ui.add(egui::DragValue::new(&mut self.cat_right_value).speed(1.0));
                            unit_combo(ui, right_unit, &right_quantity.units());
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(4.0);
            if ui.button(txt("gui.catalog.run", "Convert")).clicked() {
                let left = QuantityValue::new(self.cat_left_value, self.cat_left_unit);
                let outcome = match (operand, self.cat_right_unit) {
                    (Some(_), Some(right_unit)) => {
                        let right = QuantityValue::new(self.cat_right_value, right_unit);
                        converter.convert_with(&left, &right)
                    }
                    _ => converter.convert(&left),
                };
                self.cat_result = Some(match outcome {
                    Ok(out) => format!(
                        "{} {out} ({})",
                        txt("gui.catalog.result", "Result:"),
                        self.quantity_label(converter.target())
                    ),
                    Err(e) => format!("{}: {e}", txt("gui.common.error", "Error")),
                });
            }
            if let Some(result) = &self.cat_result {
                ui.add_space(4.0);
                ui.strong(result);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 최초 1회 화면 크기 조정
        if self.apply_initial_view_size {
            if let Some(screen) = ctx.input(|i| {
                let r = i.screen_rect();
                if r.is_positive() {
                    Some(r.size())
                } else {
                    None
                }
            }) {
                let target = egui::vec2((screen.x * 0.5).max(800.0), (screen.y * 0.5).max(600.0));
                ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(target));
                self.apply_initial_view_size = false;
            }
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용 + 라벨 복사 방지 스타일
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        let txt =
            move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Quantity Converter Toolbox"));
                ui.label(" | Desktop GUI");
                ui.separator();
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        // 설정 모달
        if self.show_settings_modal {
            let mut new_unit_system = self.config.unit_system;
            egui::Window::new(txt("gui.settings.title", "Program Settings"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_settings_modal)
                .show(ctx, |ui| {
                    ui.heading(txt("gui.settings.general", "General"));
                    ui.separator();
                    ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                    ui.horizontal(|ui| {
                        for (label, us) in [
                            ("SI", config::UnitSystem::SI),
                            ("Imperial", config::UnitSystem::Imperial),
                        ] {
                            ui.selectable_value(&mut new_unit_system, us, label);
                        }
                    });
                    ui.separator();
                    ui.label(txt("gui.settings.ui_scale", "UI scale"));
                    let scale_slider = egui::Slider::new(&mut self.ui_scale, 0.8..=1.6).suffix(" x");
                    if ui.add(scale_slider).changed() {
                        ctx.set_pixels_per_point(self.ui_scale);
                    }
                    ui.separator();
                    ui.checkbox(
                        &mut self.always_on_top,
                        txt("gui.settings.always_on_top", "Always on top"),
                    );
                    ui.separator();
                    ui.label(txt("gui.settings.alpha", "Window transparency"));
                    ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("alpha"));

                    ui.separator();
                    ui.label(txt("gui.settings.lang", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(&self.lang_input)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.lang_input,
                                "auto".into(),
                                txt("gui.settings.lang.auto", "System"),
                            );
                            ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                            ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                        });
                    ui.horizontal(|ui| {
                        ui.label(txt("gui.settings.pack_dir", "Language pack folder"));
                        ui.text_edit_singleline(&mut self.lang_pack_dir_input);
                        if ui.button(txt("gui.settings.browse", "Browse...")).clicked() {
                            if let Some(dir) = FileDialog::new().pick_folder() {
                                self.lang_pack_dir_input = dir.display().to_string();
                            }
                        }
                    });
                    if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                        self.config.language = self.lang_input.clone();
                        self.config.language_pack_dir = if self.lang_pack_dir_input.trim().is_empty()
                        {
                            None
                        } else {
                            Some(self.lang_pack_dir_input.trim().to_string())
                        };
                        self.config.window_alpha = self.window_alpha;
                        // 즉시 번역기 반영
                        let resolved = i18n::resolve_language(&self.config.language, None);
                        self.tr = i18n::Translator::new_with_pack(
                            &resolved,
                            self.config.language_pack_dir.as_deref(),
                        );
                        if let Err(e) = self.config.save() {
                            self.lang_save_status = Some(format!("Save error: {e}"));
                        } else {
                            self.lang_save_status = Some(txt("gui.settings.saved", "Saved."));
                        }
                    }
                    if let Some(msg) = &self.lang_save_status {
                        ui.label(msg);
                    }

                    ui.separator();
                    ui.label(txt("gui.settings.font", "Custom font (.ttf/.ttc)"));
                    ui.horizontal(|ui| {
                        ui.text_edit_singleline(&mut self.custom_font_path);
                        if ui.button(txt("gui.settings.browse", "Browse...")).clicked() {
                            if let Some(file) = FileDialog::new()
                                .add_filter("font", &["ttf", "ttc", "otf"])
                                .pick_file()
                            {
                                self.custom_font_path = file.display().to_string();
                            }
                        }
                        if ui.button(txt("gui.settings.font_apply", "Apply")).clicked() {
                            match load_custom_font(ctx, &self.custom_font_path) {
                                Ok(()) => self.font_load_error = None,
                                Err(e) => self.font_load_error = Some(e),
                            }
                        }
                    });
                    if let Some(err) = &self.font_load_error {
                        ui.colored_label(egui::Color32::LIGHT_RED, err);
                    }
                    if let Some(note) = &self.font_size_note {
                        ui.small(note);
                    }
                });
            if new_unit_system != self.config.unit_system {
                self.config.apply_unit_system(new_unit_system);
                self.reset_catalog();
                self.conv_from = self.config.default_units.unit_for(self.conv_kind);
            }
        }

        // 도움말 모달
        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Offline unit and quantity conversion calculator",
                    ));
                    ui.label(txt("gui.about.version", "Version: 1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.unit_conv",
                        "- Unit Converter: convert a value between units of one quantity.",
                    ));
                    ui.label(txt(
                        "gui.about.catalog",
                        "- Converter Catalog: multiply/divide by another quantity to obtain a new quantity (e.g. Length × Length → Area).",
                    ));
                    ui.label(txt(
                        "gui.about.hint",
                        "Adjust language/units/font in settings if you see issues.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Catalog => self.ui_catalog(ui),
                });
        });
    }
}
