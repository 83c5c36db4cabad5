//! Test fixtures - a small STM32F4 TrueSTUDIO project.

/// Resource manifest with linked C, assembly and library files.
///
/// Listed out of order and with one duplicate; one folder link (type 2).
pub const PROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<projectDescription>
	<name>Blinky</name>
	<comment></comment>
	<projects>
	</projects>
	<linkedResources>
		<link>
			<name>Application/User/main.c</name>
			<type>1</type>
			<locationURI>PARENT-2-PROJECT_LOC/Src/main.c</locationURI>
		</link>
		<link>
			<name>Application/User/gpio.c</name>
			<type>1</type>
			<locationURI>PARENT-2-PROJECT_LOC/Src/gpio.c</locationURI>
		</link>
		<link>
			<name>Application/Startup/startup_stm32f407xx.s</name>
			<type>1</type>
			<locationURI>PARENT-2-PROJECT_LOC/startup/startup_stm32f407xx.s</locationURI>
		</link>
		<link>
			<name>Drivers/stm32f4xx_hal.c</name>
			<type>1</type>
			<locationURI>PARENT-2-PROJECT_LOC/Drivers/STM32F4xx_HAL_Driver/Src/stm32f4xx_hal.c</locationURI>
		</link>
		<link>
			<name>Application/User/main_dup.c</name>
			<type>1</type>
			<locationURI>PARENT-2-PROJECT_LOC/Src/main.c</locationURI>
		</link>
		<link>
			<name>Lib/libarm_cortexM4lf_math.a</name>
			<type>1</type>
			<locationURI>PARENT-1-PROJECT_LOC/Lib/libarm_cortexM4lf_math.a</locationURI>
		</link>
		<link>
			<name>Drivers</name>
			<type>2</type>
			<locationURI>PARENT-2-PROJECT_LOC/Drivers</locationURI>
		</link>
	</linkedResources>
</projectDescription>
"#;

/// Build configuration with Debug and Release, only Release is read.
pub const CPROJECT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<?fileVersion 4.0.0?><cproject storage_type_id="org.eclipse.cdt.core.XmlProjectDescriptionStorage">
	<storageModule moduleId="org.eclipse.cdt.core.settings">
		<cconfiguration id="com.atollic.truestudio.exe.debug.1">
			<storageModule buildSystemId="org.eclipse.cdt.managedbuilder.core.configurationDataProvider" moduleId="cdtBuildSystem" version="4.0.0">
				<configuration artifactName="Blinky" name="Debug">
					<folderInfo id="com.atollic.truestudio.exe.debug.1." name="/" resourcePath="">
						<toolChain id="com.atollic.truestudio.exe.debug.toolchain.1" name="Atollic ARM Tools">
							<tool id="com.atollic.truestudio.exe.debug.toolchain.as.2" superClass="com.atollic.truestudio.exe.debug.toolchain.as">
								<option id="com.atollic.truestudio.common_options.target.mcu.3" name="Microcontroller" value="STM32F030F4"/>
							</tool>
						</toolChain>
					</folderInfo>
				</configuration>
			</storageModule>
		</cconfiguration>
		<cconfiguration id="com.atollic.truestudio.exe.release.1">
			<storageModule buildSystemId="org.eclipse.cdt.managedbuilder.core.configurationDataProvider" moduleId="cdtBuildSystem" version="4.0.0">
				<configuration artifactName="Blinky" name="Release">
					<folderInfo id="com.atollic.truestudio.exe.release.1." name="/" resourcePath="">
						<toolChain id="com.atollic.truestudio.exe.release.toolchain.1" name="Atollic ARM Tools">
							<tool id="com.atollic.truestudio.exe.release.toolchain.as.4" superClass="com.atollic.truestudio.exe.release.toolchain.as">
								<option id="com.atollic.truestudio.common_options.target.mcu.5" name="Microcontroller" value="STM32F407VG"/>
								<option id="com.atollic.truestudio.as.general.incpath.6" valueType="includePath">
									<listOptionValue builtIn="false" value="..\..\..\Inc"/>
								</option>
								<option id="com.atollic.truestudio.as.symbols.defined.7" valueType="definedSymbols">
									<listOptionValue builtIn="false" value="STM32F407xx"/>
								</option>
							</tool>
							<tool id="com.atollic.truestudio.exe.release.toolchain.gcc.8" superClass="com.atollic.truestudio.exe.release.toolchain.gcc">
								<option id="com.atollic.truestudio.gcc.directories.select.9" valueType="includePath">
									<listOptionValue builtIn="false" value="..\Inc"/>
									<listOptionValue builtIn="false" value="..\Drivers\STM32F4xx_HAL_Driver\Inc"/>
									<listOptionValue builtIn="false" value="..\Drivers\CMSIS\Include"/>
								</option>
								<option id="com.atollic.truestudio.gcc.symbols.defined.10" valueType="definedSymbols">
									<listOptionValue builtIn="false" value="USE_HAL_DRIVER"/>
									<listOptionValue builtIn="false" value="STM32F407xx"/>
								</option>
							</tool>
							<tool id="com.atollic.truestudio.exe.release.toolchain.ld.11" superClass="com.atollic.truestudio.exe.release.toolchain.ld">
								<option id="com.atollic.truestudio.ld.general.scriptfile.12" superClass="com.atollic.truestudio.ld.general.scriptfile" value="..\STM32F407VG_FLASH.ld"/>
							</tool>
						</toolChain>
					</folderInfo>
				</configuration>
			</storageModule>
		</cconfiguration>
	</storageModule>
</cproject>
"#;

/// Project linker script (CubeMX style).
pub const LINK_SCRIPT: &str = "/* Entry Point */
ENTRY(Reset_Handler)

/* Highest address of the user mode stack */
_estack = 0x20020000;    /* end of RAM */

_Min_Heap_Size = 0x200;
_Min_Stack_Size = 0x400;

/* Specify the memory areas */
MEMORY
{
RAM (xrw)      : ORIGIN = 0x20000000, LENGTH = 128K
CCMRAM (rw)    : ORIGIN = 0x10000000, LENGTH = 64K
FLASH (rx)     : ORIGIN = 0x8000000, LENGTH = 1024K
}

SECTIONS
{
}
";

/// Build file template covering every slot.
pub const MAKEFILE_TPL: &str = "TARGET = $TARGET
MCU = $MCU
$C_SOURCES
$ASM_SOURCES
$AS_DEFS
$C_DEFS
$AS_INCLUDES
$C_INCLUDES
LDSCRIPT = $LD_PATH
LIBS = -lc -lm$A_FILES
$$(BUILD_DIR)/%.o: %.c
\t$$(CC) -c $$(CFLAGS) $$< -o $$@
";

/// Linker script template.
pub const LINK_TPL: &str = "$ESTACK
MEMORY
{
$MEMORY
}
";
